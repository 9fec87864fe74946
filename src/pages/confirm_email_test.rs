use super::*;

#[test]
fn normalize_code_input_keeps_digits_only() {
    assert_eq!(normalize_code_input(" 12a3-45b6 "), "123456");
}

#[test]
fn normalize_code_input_caps_at_six_digits() {
    assert_eq!(normalize_code_input("1234567890"), "123456");
}

#[test]
fn validate_confirm_input_trims_and_requires_full_code() {
    assert_eq!(
        validate_confirm_input(" a@b.com ", "123456"),
        Ok(("a@b.com".to_owned(), "123456".to_owned()))
    );
    assert_eq!(
        validate_confirm_input("a@b.com", "12345"),
        Err("Enter your email and the 6-digit code.")
    );
    assert_eq!(
        validate_confirm_input("   ", "123456"),
        Err("Enter your email and the 6-digit code.")
    );
}

#[test]
fn validate_resend_input_requires_email() {
    assert_eq!(validate_resend_input(" a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_resend_input("   "), Err("Enter an email first."));
}
