use super::*;

#[test]
fn subscription_status_endpoint_embeds_id() {
    assert_eq!(
        subscription_status_endpoint("sub-9"),
        "/api/subscriptions/sub-9/status"
    );
}

#[test]
fn login_failed_message_special_cases_unauthorized() {
    assert_eq!(login_failed_message(401), "Invalid email or password.");
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn action_failed_message_includes_action_and_status() {
    assert_eq!(
        action_failed_message("email confirmation", 422),
        "email confirmation failed: 422"
    );
}
