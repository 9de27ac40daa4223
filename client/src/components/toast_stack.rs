//! Top-right stack of transient notices.
//!
//! Reads the `ToastNotifier` from context. Clicking a toast dismisses it
//! early; otherwise it expires on its own timer.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::toasts::ToastNotifier;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<ToastNotifier>();
    let state = toasts.state();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || state.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class();
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
