//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <h2 class="footer__title">"CV Analysis System"</h2>
            <p class="footer__tagline">"AI-powered search to find the right talent instantly"</p>
            <div class="footer__divider"></div>
            <div class="footer__links">
                <a href="#">"Privacy Policy"</a>
                <a href="#">"Terms of Service"</a>
                <a href="#">"Contact Us"</a>
            </div>
            <p class="footer__copyright">"\u{a9} CV Analysis System. All rights reserved."</p>
        </footer>
    }
}
