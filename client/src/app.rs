//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use screening::ApiConfig;

use crate::components::{footer::Footer, navbar::Navbar, toast_stack::ToastStack};
use crate::net::api::{self, HttpBackend};
use crate::pages::{chat::ChatPage, search::SearchPage, upload::UploadPage};
use crate::state::toasts::{ToastNotifier, ToastState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL travels to the browser in a `<meta>` tag so the
/// hydrated client talks to the same backend the server was configured with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let base_url = use_context::<ApiConfig>().unwrap_or_default().base_url;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=api::BASE_URL_META content=base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared backend and toast notifier, then routes to the three
/// pages. Page state is owned by each page and dropped on navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = HttpBackend::new(api::resolve_config());
    let toasts = ToastNotifier::new(RwSignal::new(ToastState::default()));

    provide_context(backend);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/cv-analysis.css"/>
        <Title text="CV Analysis"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=UploadPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("chatbot") view=ChatPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
        <ToastStack/>
    }
}
