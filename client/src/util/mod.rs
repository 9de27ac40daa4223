//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the pure parts can be tested natively.

pub mod files;
pub mod markdown;
pub mod task;
