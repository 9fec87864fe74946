//! Email confirmation page: verify a 6-digit code, with resend.

#[cfg(test)]
#[path = "confirm_email_test.rs"]
mod confirm_email_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;

/// Keep only the digits of whatever was typed or pasted into the code box.
fn normalize_code_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

fn validate_confirm_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || code.len() != 6 {
        return Err("Enter your email and the 6-digit code.");
    }
    Ok((email.to_owned(), code.to_owned()))
}

fn validate_resend_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

/// Email confirmation page.
#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_confirm_input(&email.get(), &code.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = auth.confirm_email(&email_value, &code_value).await;
                if outcome.success {
                    navigate("/login", NavigateOptions::default());
                } else {
                    info.set(outcome.error.unwrap_or_else(|| "Verification failed.".to_owned()));
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, code_value);
        }
    };

    let on_resend = move |_| {
        if busy.get() {
            return;
        }
        let email_value = match validate_resend_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending a new code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = auth.resend_confirmation(&email_value).await;
            if outcome.success {
                info.set("A new code is on its way. Check your inbox.".to_owned());
            } else {
                info.set(outcome.error.unwrap_or_else(|| "Resend failed.".to_owned()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value);
        }
    };

    view! {
        <div class="confirm-page">
            <div class="confirm-card">
                <h1>"Confirm your email"</h1>
                <p>"Enter the 6-digit code we sent to your inbox."</p>
                <form class="confirm-form" on:submit=on_confirm>
                    <input
                        class="confirm-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="confirm-input confirm-input--code"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Confirm"
                    </button>
                </form>
                <button class="btn btn--quiet" on:click=on_resend disabled=move || busy.get()>
                    "Resend code"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="confirm-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
