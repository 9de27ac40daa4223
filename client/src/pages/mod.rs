//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page builds its own `screening` controller over a fresh
//! `SignalStore`, so page state is discarded on navigation. Rendering of
//! repeated pieces is delegated to `components`.

pub mod chat;
pub mod search;
pub mod upload;
