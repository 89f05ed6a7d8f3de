//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Validates basic email format
///
/// Checks for:
/// - local part of `[a-zA-Z0-9._%+-]`
/// - exactly one '@' symbol
/// - a dotted domain with a 2+ letter TLD
/// - no empty labels (`a@b..com`, `a@.com`)
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_REGEX.is_match(email) {
        return false;
    }

    let domain = match email.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => return false,
    };

    !(domain.starts_with('.') || domain.starts_with('-') || domain.contains(".."))
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}
