//! Fire-and-forget async work from event handlers.
//!
//! In the browser the future runs on the local executor. During SSR there is
//! no user to react to, so the future is dropped unpolled.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

pub fn spawn(future: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "hydrate"))]
    drop(future);
}
