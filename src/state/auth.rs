//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session itself is owned
//! by the hosted auth service; this module only observes it and forwards
//! the mutation calls.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// The route guard reads this as a three-state machine: `Unknown` while
/// `loading`, then `Authenticated` or `Unauthenticated`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// True until the initial session check resolves.
    pub loading: bool,
    /// True only after an explicit successful session observation.
    pub logged_in: bool,
    /// Identity of the signed-in user, if any.
    pub user: Option<User>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            loading: true,
            logged_in: false,
            user: None,
        }
    }
}

/// The guard's view of the session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Session check still pending.
    Unknown,
    /// A user is signed in.
    Authenticated,
    /// Check resolved with no session.
    Unauthenticated,
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Unknown
        } else if self.logged_in {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

/// Result of an auth mutation call, shaped for direct display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl AuthOutcome {
    fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self { success: true, error: None },
            Err(error) => Self { success: false, error: Some(error) },
        }
    }
}

/// Shared auth handle provided via context at the application root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Reactive auth state for guards and components.
    pub fn state(self) -> RwSignal<AuthState> {
        self.state
    }

    /// Kick off the one-time session retrieval on mount.
    ///
    /// Resolves `loading` on success and failure alike; a failed fetch is
    /// an unauthenticated observation, not an error.
    pub fn load_session(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = api::fetch_current_user().await;
            self.state.try_update(|state| {
                state.logged_in = user.is_some();
                state.user = user;
                state.loading = false;
            });
        });
    }

    /// Attempt a session login; returns whether it succeeded.
    pub async fn login(self, email: &str, password: &str) -> bool {
        match api::login(email, password).await {
            Ok(user) => {
                self.state.try_update(|state| {
                    state.logged_in = true;
                    state.user = Some(user);
                    state.loading = false;
                });
                true
            }
            Err(_) => false,
        }
    }

    /// End the session and reset local auth state.
    pub async fn logout(self) {
        api::logout().await;
        self.state.try_update(|state| {
            state.logged_in = false;
            state.user = None;
            state.loading = false;
        });
    }

    /// Request a password-reset email.
    pub async fn reset_password(self, email: &str) -> AuthOutcome {
        AuthOutcome::from_result(api::request_password_reset(email).await)
    }

    /// Verify an email confirmation code.
    pub async fn confirm_email(self, email: &str, code: &str) -> AuthOutcome {
        AuthOutcome::from_result(api::confirm_email(email, code).await)
    }

    /// Request a fresh confirmation code.
    pub async fn resend_confirmation(self, email: &str) -> AuthOutcome {
        AuthOutcome::from_result(api::resend_confirmation(email).await)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
