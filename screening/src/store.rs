//! Shared handle to controller state.
//!
//! A controller mutates its state in short synchronous closures and never
//! holds a borrow across an `.await`, so a UI can render intermediate states
//! (uploading, loading) while a request is in flight. The Leptos client backs
//! this with a signal; tests and the CLI use [`LocalStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

pub trait Store<T> {
    /// Read the current value.
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutate the current value in place.
    fn update(&self, f: impl FnOnce(&mut T));
}

/// Single-threaded `Rc<RefCell<T>>` store.
#[derive(Debug, Default)]
pub struct LocalStore<T>(Rc<RefCell<T>>);

impl<T> LocalStore<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
}

impl<T: Clone> LocalStore<T> {
    /// Clone out the current value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for LocalStore<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Store<T> for LocalStore<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.borrow_mut());
    }
}
