//! Password reset page: request a reset email.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;

use crate::state::auth::AuthContext;

fn validate_reset_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// Password reset page.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending reset email...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = auth.reset_password(&email_value).await;
            if outcome.success {
                sent.set(true);
                info.set(String::new());
            } else {
                info.set(outcome.error.unwrap_or_else(|| "Reset request failed.".to_owned()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value);
        }
    };

    view! {
        <div class="reset-page">
            <div class="reset-card">
                <Show
                    when=move || !sent.get()
                    fallback=|| view! {
                        <h1>"Check your email"</h1>
                        <p>"We sent a link to reset your password. It expires in one hour."</p>
                        <a class="btn" href="/login">"Back to login"</a>
                    }
                >
                    <h1>"Reset your password"</h1>
                    <p>"Enter your account email and we'll send you a reset link."</p>
                    <form class="reset-form" on:submit=on_submit>
                        <input
                            class="reset-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Send reset link"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="reset-message">{move || info.get()}</p>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
