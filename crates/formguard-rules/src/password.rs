//! Password validation functions

use std::ops::RangeInclusive;

/// Special characters accepted by the password policy
pub const PASSWORD_SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?~"#;

/// Default accepted password length, in characters
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 12..=256;

/// Validates a password against the account policy
///
/// The policy is checked in order and the first failure is reported:
/// - length within `length` (characters, not bytes)
/// - at least one uppercase letter
/// - at least one lowercase letter
/// - at least one digit
/// - at least one character from [`PASSWORD_SPECIAL_CHARS`]
pub fn validate_password(password: &str, length: RangeInclusive<usize>) -> Result<(), String> {
    let count = password.chars().count();
    if !length.contains(&count) {
        return Err(format!(
            "Password must be between {} and {} characters",
            length.start(),
            length.end()
        ));
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err(format!(
            "Password must contain at least one special character ({})",
            PASSWORD_SPECIAL_CHARS
        ));
    }

    Ok(())
}

/// Validates that a confirmation matches the original password
///
/// A missing original never matches.
pub fn validate_password_match(confirmation: &str, original: Option<&str>) -> Result<(), String> {
    match original {
        Some(original) if original == confirmation => Ok(()),
        _ => Err("Passwords do not match".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_password_length_bounds() {
        let err = validate_password("Short1!", PASSWORD_LENGTH).unwrap_err();
        assert!(err.contains("12") && err.contains("256"));

        let too_long = format!("Aa1!{}", "x".repeat(253));
        assert!(validate_password(&too_long, PASSWORD_LENGTH).is_err());

        let max = format!("Aa1!{}", "x".repeat(252));
        assert!(validate_password(&max, PASSWORD_LENGTH).is_ok());
    }

    #[test]
    fn test_password_character_classes() {
        assert!(validate_password("LongEnough123!", PASSWORD_LENGTH).is_ok());
        assert!(validate_password("Secure@Passphrase9", PASSWORD_LENGTH).is_ok());

        assert!(validate_password("longenough123!", PASSWORD_LENGTH)
            .unwrap_err()
            .contains("uppercase"));
        assert!(validate_password("LONGENOUGH123!", PASSWORD_LENGTH)
            .unwrap_err()
            .contains("lowercase"));
        assert!(validate_password("LongEnoughAbc!", PASSWORD_LENGTH)
            .unwrap_err()
            .contains("digit"));
        assert!(validate_password("LongEnough1234", PASSWORD_LENGTH)
            .unwrap_err()
            .contains("special"));
    }

    #[test]
    fn test_length_counts_characters() {
        // 12 characters, more than 12 bytes
        assert!(validate_password("Ääääääääa1!B", PASSWORD_LENGTH).is_ok());
    }

    #[test]
    fn test_password_match() {
        assert!(validate_password_match("Abc12345678!", Some("Abc12345678!")).is_ok());
        assert_eq!(
            validate_password_match("different", Some("Abc12345678!")).unwrap_err(),
            "Passwords do not match"
        );
        assert!(validate_password_match("anything", None).is_err());
    }
}
