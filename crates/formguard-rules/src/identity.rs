//! Identity fields: social security number and phone number

use once_cell::sync::Lazy;
use regex::Regex;

static SSN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$").expect("ssn pattern compiles"));

// E.164: optional '+', no leading zero, at most 15 digits
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{6,14}$").expect("phone pattern compiles"));

/// Validates a US social security number in `AAA-GG-SSSS` form
pub fn validate_ssn(ssn: &str) -> Result<(), String> {
    if SSN_REGEX.is_match(ssn.trim()) {
        Ok(())
    } else {
        Err("SSN must be in the format XXX-XX-XXXX".to_string())
    }
}

/// Validates an international phone number
///
/// Spaces, dashes, dots and parentheses are treated as formatting and ignored.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let compact: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    if PHONE_REGEX.is_match(&compact) {
        Ok(())
    } else {
        Err("Please enter a valid phone number".to_string())
    }
}
