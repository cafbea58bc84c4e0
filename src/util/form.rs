//! Input checks shared by the auth and deal forms.
//!
//! Runs before a submission starts so obviously bad input never reaches the
//! network or flips a form to `Pending`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trim and check the email/password pair.
///
/// # Errors
///
/// Returns a user-facing message when either field is unusable.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Initial value of the deal amount field.
pub const DEFAULT_DEAL_AMOUNT: &str = "0";

/// Parse the deal amount field.
///
/// # Errors
///
/// Returns a user-facing message unless the value is a finite,
/// non-negative number.
pub fn parse_deal_value(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err("Enter a non-negative amount."),
    }
}

/// Check the selected sales rep.
///
/// # Errors
///
/// Returns a user-facing message when no rep is selected.
pub fn validate_rep_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Select a sales rep.");
    }
    Ok(name.to_owned())
}
