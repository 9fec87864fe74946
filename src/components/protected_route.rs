//! Session guard wrapping pages that require an authenticated user.
//!
//! DESIGN
//! ======
//! The guard races the session check against a fixed timer; whichever
//! settles first decides the view. It never renders protected children
//! unless `logged_in` is explicitly observed — ambiguity resolves toward
//! denying access. A timeout with the check still pending is surfaced as a
//! recoverable error view, which distinguishes "auth service is slow or
//! down" from "user is simply not logged in".

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthContext;
use crate::util::guard::{
    DEFAULT_REDIRECT_TARGET, GuardView, REDIRECT_MARKER_KEY, redirect_marker, resolve_guard_view,
};
use crate::util::storage;

#[cfg(feature = "hydrate")]
use crate::util::guard::AUTH_CHECK_TIMEOUT_MS;

/// Gate a subtree on authentication state with a bounded wait.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let timed_out = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let wait = std::time::Duration::from_millis(u64::from(AUTH_CHECK_TIMEOUT_MS));
        gloo_timers::future::sleep(wait).await;
        // No-op once the route has been disposed; the stale fire must not
        // touch an unmounted guard.
        timed_out.try_set(true);
    });

    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move || {
        let state = auth.state().get();
        if resolve_guard_view(&state, timed_out.get()) == GuardView::Redirect {
            let path = location.pathname.get_untracked();
            // Record where the visitor was headed so the login flow can
            // return them, unless that would loop back onto the target.
            if let Some(marker) = redirect_marker(&path, DEFAULT_REDIRECT_TARGET) {
                storage::session_set(REDIRECT_MARKER_KEY, &marker);
            }
            navigate(DEFAULT_REDIRECT_TARGET, NavigateOptions::default());
        }
    });

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        {move || match resolve_guard_view(&auth.state().get(), timed_out.get()) {
            GuardView::Content => children().into_any(),
            GuardView::Checking | GuardView::Redirect => view! {
                <div class="route-guard route-guard--checking">
                    <p>"Checking your session..."</p>
                </div>
            }
            .into_any(),
            GuardView::TimedOut => view! {
                <div class="route-guard route-guard--timeout">
                    <h2>"We couldn't verify your session"</h2>
                    <p>"The sign-in check is taking longer than expected."</p>
                    <div class="route-guard__actions">
                        <button class="btn btn--primary" on:click=on_refresh>
                            "Refresh"
                        </button>
                        <a class="btn" href=DEFAULT_REDIRECT_TARGET>
                            "Go to login"
                        </a>
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}
