//! Static site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column">
                    <h4>"Shop"</h4>
                    <a href="/products">"All supplements"</a>
                    <a href="/account">"Manage subscription"</a>
                </div>
                <div class="site-footer__column">
                    <h4>"Support"</h4>
                    <a href="/reset-password">"Reset password"</a>
                    <a href="/confirm-email">"Confirm email"</a>
                </div>
            </div>
            <p class="site-footer__note">
                "Personalized supplements, delivered on your schedule."
            </p>
        </footer>
    }
}
