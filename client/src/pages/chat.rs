//! AI chat page: candidate picker, transcript and question box.
//!
//! SYSTEM CONTEXT
//! ==============
//! The candidate list is fetched once when the page mounts. Each send goes
//! through `ChatController::send`, which appends the user turn before the
//! request resolves and the bot turn after.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use screening::ChatState;

use crate::components::chat_bubble::ChatBubble;
use crate::net::api::HttpBackend;
use crate::state::BrowserChat;
use crate::state::signal_store::SignalStore;
use crate::state::toasts::ToastNotifier;
use crate::util::task::spawn;

fn heading(state: &ChatState) -> String {
    match state.selected_name() {
        Some(name) => format!("Ask about {name}"),
        None => "Select a Candidate".to_owned(),
    }
}

fn input_enabled(state: &ChatState) -> bool {
    state.selected.is_some()
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let toasts = expect_context::<ToastNotifier>();
    let store = SignalStore::new(ChatState::default());
    let state = store.signal();
    let controller = StoredValue::new(BrowserChat::new(backend, toasts, store));
    let log_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let chat = controller.get_value();
        spawn(async move {
            chat.activate().await;
        });
    });

    Effect::new(move || {
        let _ = state.with(|s| s.messages.len());
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = log_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move || {
        let chat = controller.get_value();
        spawn(async move {
            chat.send().await;
        });
    };

    view! {
        <section class="page page--chat">
            <div class="card">
                <h2 class="card__title">{move || state.with(heading)}</h2>
                <select
                    class="field__input chat__picker"
                    prop:value=move || state.with(|s| s.selected.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        controller.with_value(|c| c.select_candidate(&id));
                    }
                >
                    <option value="">"Select a Candidate"</option>
                    {move || {
                        state
                            .with(|s| s.candidates.clone())
                            .into_iter()
                            .map(|candidate| view! { <option value=candidate.id>{candidate.name}</option> })
                            .collect_view()
                    }}
                </select>

                <div class="chat__log" node_ref=log_ref>
                    {move || {
                        state
                            .with(|s| s.messages.clone())
                            .into_iter()
                            .map(|message| view! { <ChatBubble message/> })
                            .collect_view()
                    }}
                </div>

                <div class="field field--inline chat__compose">
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Ask a question..."
                        disabled=move || !state.with(input_enabled)
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            controller.with_value(|c| c.set_query(text));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                send();
                            }
                        }
                    />
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.with(input_enabled)
                        on:click=move |_| send()
                    >
                        "Ask AI"
                    </button>
                </div>
            </div>
        </section>
    }
}
