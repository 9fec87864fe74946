use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_requires_an_email_shape() {
    assert_eq!(
        validate_login_input("not-an-email", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn post_login_destination_uses_marker_path() {
    assert_eq!(
        post_login_destination(Some("/checkout".to_owned())),
        "/checkout"
    );
}

#[test]
fn post_login_destination_defaults_to_account() {
    assert_eq!(post_login_destination(None), "/account");
}

#[test]
fn post_login_destination_rejects_offsite_markers() {
    assert_eq!(
        post_login_destination(Some("https://evil.example".to_owned())),
        "/account"
    );
}
