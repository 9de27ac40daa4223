//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (navbar, footer, toasts) and the repeated
//! pieces of the search and chat pages. They hold no controller state.

pub mod candidate_card;
pub mod chat_bubble;
pub mod footer;
pub mod navbar;
pub mod toast_stack;
