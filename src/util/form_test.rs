use super::*;

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  rep@example.com ", " pw "),
        Ok(("rep@example.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_credentials_requires_at_sign() {
    assert_eq!(validate_credentials("rep", "pw"), Err("Enter a valid email address."));
}

#[test]
fn parse_deal_value_accepts_non_negative_numbers() {
    assert_eq!(parse_deal_value("0"), Ok(0.0));
    assert_eq!(parse_deal_value(" 1250.5 "), Ok(1250.5));
}

#[test]
fn parse_deal_value_rejects_negative_and_garbage() {
    for raw in ["-10", "", "ten", "NaN", "inf"] {
        assert_eq!(parse_deal_value(raw), Err("Enter a non-negative amount."), "input {raw:?}");
    }
}

#[test]
fn validate_rep_name_requires_selection() {
    assert_eq!(validate_rep_name(" Ava "), Ok("Ava".to_owned()));
    assert_eq!(validate_rep_name(""), Err("Select a sales rep."));
}

#[test]
fn default_deal_amount_submits_as_zero() {
    assert_eq!(parse_deal_value(DEFAULT_DEAL_AMOUNT), Ok(0.0));
}
