//! Login page with email + password session auth.
//!
//! Consumes the session-scoped `redirectAfterLogin` marker written by the
//! route guard so a successful sign-in returns the visitor to the page they
//! were headed for.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
#[cfg(feature = "hydrate")]
use crate::util::guard::REDIRECT_MARKER_KEY;
#[cfg(feature = "hydrate")]
use crate::util::storage;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to land after a successful login.
///
/// Only same-site paths from the marker are honored; anything else falls
/// back to the account page.
fn post_login_destination(marker: Option<String>) -> String {
    marker
        .filter(|path| path.starts_with('/'))
        .unwrap_or_else(|| "/account".to_owned())
}

/// Login page — email/password form plus recovery links.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if auth.login(&email_value, &password_value).await {
                    let marker = storage::session_get(REDIRECT_MARKER_KEY);
                    storage::session_remove(REDIRECT_MARKER_KEY);
                    navigate(&post_login_destination(marker), NavigateOptions::default());
                } else {
                    info.set("Invalid email or password.".to_owned());
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-links">
                    <a href="/reset-password">"Forgot password?"</a>
                    <a href="/confirm-email">"Confirm your email"</a>
                </div>
            </div>
        </div>
    }
}
