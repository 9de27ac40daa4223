//! `Store` backed by a Leptos signal.
//!
//! DESIGN
//! ======
//! Uses a reference-counted `ArcRwSignal` rather than an arena `RwSignal` so
//! an in-flight request can still write its result after the page that
//! started it has been unmounted.

#[cfg(test)]
#[path = "signal_store_test.rs"]
mod signal_store_test;

use leptos::prelude::*;
use screening::Store;

pub struct SignalStore<T: 'static>(ArcRwSignal<T>);

impl<T: Send + Sync + 'static> SignalStore<T> {
    pub fn new(value: T) -> Self {
        Self(ArcRwSignal::new(value))
    }

    /// Arena handle for views, owned by the current reactive owner.
    pub fn signal(&self) -> RwSignal<T> {
        RwSignal::from(self.0.clone())
    }
}

impl<T> Clone for SignalStore<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> std::fmt::Debug for SignalStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SignalStore")
    }
}

impl<T: Send + Sync + 'static> Store<T> for SignalStore<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }
}
