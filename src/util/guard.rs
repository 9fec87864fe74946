//! Route-guard resolution for authentication-gated pages.
//!
//! DESIGN
//! ======
//! The guard races the real session check against a fixed timer and resolves
//! ambiguity toward denying access. Resolution is a pure function of
//! `(AuthState, timed_out)` so the branching is unit-testable without a
//! browser; the `ProtectedRoute` component owns the timer and navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

/// How long the guard waits for the session check before giving up.
pub const AUTH_CHECK_TIMEOUT_MS: u32 = 2_000;

/// Session-scoped key holding the path to return to after login.
pub const REDIRECT_MARKER_KEY: &str = "redirectAfterLogin";

/// Where unauthenticated visitors are sent.
pub const DEFAULT_REDIRECT_TARGET: &str = "/login";

/// What a guarded route should render for the current auth observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Session check still pending and within the timeout window.
    Checking,
    /// Session confirmed; render the protected subtree.
    Content,
    /// Session check never resolved; show the recoverable error view.
    TimedOut,
    /// Session resolved to unauthenticated; navigate to the login page.
    Redirect,
}

/// Resolve the guard view for an auth observation.
///
/// Children are rendered only on an explicit `logged_in` observation; a
/// timeout while the check is still pending never grants access.
pub fn resolve_guard_view(auth: &AuthState, timed_out: bool) -> GuardView {
    if !auth.loading {
        if auth.logged_in {
            GuardView::Content
        } else {
            GuardView::Redirect
        }
    } else if timed_out {
        GuardView::TimedOut
    } else {
        GuardView::Checking
    }
}

/// The marker value to record before redirecting, if any.
///
/// Returns `None` when the visitor is already on the redirect target, which
/// would otherwise loop the login flow back onto itself.
pub fn redirect_marker(current_path: &str, redirect_to: &str) -> Option<String> {
    if current_path == redirect_to {
        None
    } else {
        Some(current_path.to_owned())
    }
}
