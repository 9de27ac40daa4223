//! Toast notifications.
//!
//! DESIGN
//! ======
//! `ToastNotifier` is the browser implementation of `screening::Notify`.
//! It is provided as context by `App` and handed to each controller, so no
//! page reaches for a global toast queue. Each toast dismisses itself after
//! [`TOAST_TTL_MS`] or when clicked.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use screening::{Notice, NoticeLevel, Notify};

pub const TOAST_TTL_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("toast toast--{}", self.level.as_str())
    }
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, level: notice.level, text: notice.text });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier(RwSignal<ToastState>);

impl ToastNotifier {
    pub fn new(state: RwSignal<ToastState>) -> Self {
        Self(state)
    }

    pub fn state(self) -> RwSignal<ToastState> {
        self.0
    }

    pub fn dismiss(self, id: u64) {
        self.0.try_update(|s| s.dismiss(id));
    }
}

impl Notify for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => log::warn!("toast: {}", notice.text),
            _ => log::debug!("toast: {}", notice.text),
        }
        let Some(id) = self.0.try_update(|s| s.push(notice)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.dismiss(id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
