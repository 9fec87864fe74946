use super::*;

#[test]
fn savings_label_shows_difference() {
    assert_eq!(savings_label(29.99, Some(39.99)), Some("Save $10.00".to_owned()));
}

#[test]
fn savings_label_absent_without_original_price() {
    assert_eq!(savings_label(29.99, None), None);
}

#[test]
fn savings_label_absent_when_original_not_higher() {
    assert_eq!(savings_label(29.99, Some(29.99)), None);
    assert_eq!(savings_label(29.99, Some(19.99)), None);
}
