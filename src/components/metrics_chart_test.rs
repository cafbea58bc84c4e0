use super::*;

#[test]
fn format_amount_uses_two_decimals() {
    assert_eq!(format_amount(0.0), "$0.00");
    assert_eq!(format_amount(1250.5), "$1250.50");
}
