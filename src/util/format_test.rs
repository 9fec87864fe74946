use super::*;

#[test]
fn format_price_pads_to_two_decimals() {
    assert_eq!(format_price(15.99), "$15.99");
    assert_eq!(format_price(31.98), "$31.98");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(5.5), "$5.50");
}

#[test]
fn frequency_label_singular_and_plural() {
    assert_eq!(frequency_label(1), "Every week");
    assert_eq!(frequency_label(4), "Every 4 weeks");
}
