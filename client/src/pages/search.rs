//! Candidate search page: filter form plus result cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every filter control writes straight into the controller's filter object.
//! Nothing is sent until the Search button is pressed, and the backend does
//! all matching.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use screening::models::PREDEFINED_SKILLS;
use screening::{ExperienceLevel, SearchState};

use crate::components::candidate_card::CandidateCard;
use crate::net::api::HttpBackend;
use crate::state::BrowserSearch;
use crate::state::signal_store::SignalStore;
use crate::state::toasts::ToastNotifier;
use crate::util::task::spawn;

fn experience_value(level: Option<ExperienceLevel>) -> &'static str {
    level.map_or("", ExperienceLevel::code)
}

fn search_label(loading: bool) -> &'static str {
    if loading { "Searching..." } else { "Search" }
}

fn chip_class(active: bool) -> &'static str {
    if active { "chip chip--active" } else { "chip" }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let toasts = expect_context::<ToastNotifier>();
    let store = SignalStore::new(SearchState::default());
    let state = store.signal();
    let controller = StoredValue::new(BrowserSearch::new(backend, toasts, store));

    let certification = RwSignal::new(String::new());

    let add_skill = move || {
        controller.with_value(|c| c.add_custom_skill());
    };
    let add_certification = move || {
        let text = certification.get_untracked();
        if controller.with_value(|c| c.add_certification(&text)) {
            certification.set(String::new());
        }
    };
    let on_search = move |_| {
        let search = controller.get_value();
        spawn(async move {
            search.search().await;
        });
    };

    view! {
        <section class="page page--search">
            <div class="card">
                <h2 class="card__title">"Search Candidates"</h2>

                <label class="field">
                    <span class="field__label">"Experience (Min Years)"</span>
                    <select
                        class="field__input"
                        prop:value=move || state.with(|s| experience_value(s.filters.min_experience))
                        on:change=move |ev| {
                            let level = ExperienceLevel::from_code(&event_target_value(&ev));
                            controller.with_value(|c| c.set_min_experience(level));
                        }
                    >
                        <option value="">"Any"</option>
                        {ExperienceLevel::ALL
                            .into_iter()
                            .map(|level| view! { <option value=level.code()>{level.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="field">
                    <span class="field__label">"Education Level"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || state.with(|s| s.filters.education_level.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            controller.with_value(|c| c.set_education_level(text));
                        }
                    />
                </label>

                <div class="field">
                    <span class="field__label">"Skills:"</span>
                    <div class="chips">
                        {PREDEFINED_SKILLS
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <button
                                        class=move || chip_class(state.with(|s| s.filters.has_skill(skill)))
                                        on:click=move |_| controller.with_value(|c| c.toggle_skill(skill))
                                    >
                                        {skill}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="field field--inline">
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Enter Custom Skill"
                        prop:value=move || state.with(|s| s.filters.custom_skill.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            controller.with_value(|c| c.set_custom_skill(text));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add_skill();
                            }
                        }
                    />
                    <button class="btn btn--secondary" on:click=move |_| add_skill()>"Add"</button>
                </div>

                <div class="chips chips--selected">
                    {move || {
                        state
                            .with(|s| s.filters.skills.clone())
                            .into_iter()
                            .map(|skill| {
                                let target = skill.clone();
                                view! {
                                    <span class="chip chip--active">
                                        {skill}
                                        <button
                                            class="chip__remove"
                                            aria-label="Remove skill"
                                            on:click=move |_| controller.with_value(|c| c.remove_skill(&target))
                                        >
                                            "\u{d7}"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="field field--inline">
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Enter Certification"
                        prop:value=move || certification.get()
                        on:input=move |ev| certification.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add_certification();
                            }
                        }
                    />
                    <button class="btn btn--secondary" on:click=move |_| add_certification()>"Add"</button>
                </div>

                <div class="chips chips--selected">
                    {move || {
                        state
                            .with(|s| s.filters.certifications.clone())
                            .into_iter()
                            .map(|cert| {
                                let target = cert.clone();
                                view! {
                                    <span class="chip chip--active">
                                        {cert}
                                        <button
                                            class="chip__remove"
                                            aria-label="Remove certification"
                                            on:click=move |_| controller.with_value(|c| c.remove_certification(&target))
                                        >
                                            "\u{d7}"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <button
                    class="btn btn--primary btn--block"
                    disabled=move || state.with(|s| s.loading)
                    on:click=on_search
                >
                    {move || search_label(state.with(|s| s.loading))}
                </button>
            </div>

            <div class="results">
                <Show when=move || state.with(|s| s.no_results)>
                    <p class="results__empty">"No candidates found."</p>
                </Show>
                {move || {
                    state
                        .with(|s| s.results.clone())
                        .into_iter()
                        .map(|candidate| view! { <CandidateCard candidate/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
