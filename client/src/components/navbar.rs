//! Top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;

const LINKS: [(&str, &str); 3] = [
    ("/", "Upload Resume"),
    ("/search", "Search Candidates"),
    ("/chatbot", "AI Chatbot"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <span class="navbar__brand">"CV Analysis"</span>
                <div class="navbar__links">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="navbar__link">{*label}</a> })
                        .collect_view()}
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="navbar__mobile" on:click=move |_| open.set(false)>
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="navbar__mobile-link">{*label}</a> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
