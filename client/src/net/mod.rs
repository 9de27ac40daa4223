//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `screening::Backend` gateway for the browser. Every
//! request to the CV analysis backend goes through it.

pub mod api;
