//! Reactive state adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controller state lives in `screening` types. This module wraps it in
//! Leptos signals so views re-render when a controller updates it, and
//! names the concrete controller types the pages use.

pub mod signal_store;
pub mod toasts;

use screening::{ChatController, ChatState, SearchController, SearchState, UploadController, UploadState};

use crate::net::api::HttpBackend;
use signal_store::SignalStore;
use toasts::ToastNotifier;

pub type BrowserUpload = UploadController<HttpBackend, ToastNotifier, SignalStore<UploadState>>;
pub type BrowserSearch = SearchController<HttpBackend, ToastNotifier, SignalStore<SearchState>>;
pub type BrowserChat = ChatController<HttpBackend, ToastNotifier, SignalStore<ChatState>>;
