use super::*;

#[test]
fn cart_badge_shows_exact_count() {
    assert_eq!(cart_badge_label(1), "1");
    assert_eq!(cart_badge_label(42), "42");
}

#[test]
fn cart_badge_caps_at_ninety_nine() {
    assert_eq!(cart_badge_label(99), "99");
    assert_eq!(cart_badge_label(100), "99+");
}
