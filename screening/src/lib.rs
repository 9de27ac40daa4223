//! Shared resume-screening client core.
//!
//! This crate owns the client-side contract of the CV analysis product: the
//! wire models for candidates and filters, the notice vocabulary, and the
//! three page controllers (upload, search, chat). It is framework-free so the
//! Leptos `client` and the terminal `cli` drive the same logic.
//!
//! SEAMS
//! =====
//! - [`Backend`] is the single HTTP gateway. Browser and CLI each supply one.
//! - [`Notify`] receives user-facing notices (toasts, stderr lines).
//! - [`Store`] holds controller state so a UI can observe it mid-request.

pub mod backend;
pub mod chat;
pub mod models;
pub mod notice;
pub mod search;
pub mod store;
pub mod upload;

#[cfg(test)]
mod fakes;

pub use backend::{ApiConfig, ApiError, Backend, QueryRequest, QueryResponse, SearchResponse, UploadProgress};
pub use chat::{ChatController, ChatMessage, ChatOutcome, ChatState, Sender};
pub use models::{Candidate, CandidateRef, ExperienceLevel, ResumeFile, SearchFilters};
pub use notice::{Notice, NoticeLevel, Notify};
pub use search::{SearchController, SearchOutcome, SearchState};
pub use store::{LocalStore, Store};
pub use upload::{UploadController, UploadOutcome, UploadState};
