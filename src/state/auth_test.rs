use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_starts_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.logged_in);
    assert!(state.user.is_none());
}

// =============================================================
// AuthPhase
// =============================================================

#[test]
fn phase_is_unknown_while_loading() {
    let state = AuthState::default();
    assert_eq!(state.phase(), AuthPhase::Unknown);
}

#[test]
fn phase_is_authenticated_when_logged_in() {
    let state = AuthState { loading: false, logged_in: true, user: None };
    assert_eq!(state.phase(), AuthPhase::Authenticated);
}

#[test]
fn phase_is_unauthenticated_when_resolved_without_session() {
    let state = AuthState { loading: false, logged_in: false, user: None };
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
}

// =============================================================
// AuthOutcome
// =============================================================

#[test]
fn outcome_from_ok_has_no_error() {
    let outcome = AuthOutcome::from_result(Ok(()));
    assert!(outcome.success);
    assert!(outcome.error.is_none());
}

#[test]
fn outcome_from_err_carries_message() {
    let outcome = AuthOutcome::from_result(Err("code expired".to_owned()));
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("code expired"));
}
