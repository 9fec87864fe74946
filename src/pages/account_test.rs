use super::*;

// =============================================================
// Status labels
// =============================================================

#[test]
fn status_labels_are_display_ready() {
    assert_eq!(status_label(SubscriptionStatus::Active), "Active");
    assert_eq!(status_label(SubscriptionStatus::Paused), "Paused");
    assert_eq!(status_label(SubscriptionStatus::Cancelled), "Cancelled");
}

// =============================================================
// Lifecycle actions
// =============================================================

#[test]
fn active_subscriptions_can_pause_or_cancel() {
    assert!(can_pause(SubscriptionStatus::Active));
    assert!(!can_resume(SubscriptionStatus::Active));
    assert!(can_cancel(SubscriptionStatus::Active));
}

#[test]
fn paused_subscriptions_can_resume_or_cancel() {
    assert!(!can_pause(SubscriptionStatus::Paused));
    assert!(can_resume(SubscriptionStatus::Paused));
    assert!(can_cancel(SubscriptionStatus::Paused));
}

#[test]
fn cancelled_subscriptions_are_terminal() {
    assert!(!can_pause(SubscriptionStatus::Cancelled));
    assert!(!can_resume(SubscriptionStatus::Cancelled));
    assert!(!can_cancel(SubscriptionStatus::Cancelled));
}
