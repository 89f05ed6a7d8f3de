//! String validation functions

/// Validates string length, counted in characters
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Rejects values that are empty once surrounding whitespace is removed
pub fn validate_not_blank(s: &str, label: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        Err(format!("{} cannot be blank", label))
    } else {
        Ok(())
    }
}

/// Validates a username: non-blank after trimming, at most 64 characters
pub fn validate_username(username: &str) -> Result<(), String> {
    validate_not_blank(username, "Username")?;
    validate_max_length(username.trim(), 64)
        .map_err(|_| "Username must be at most 64 characters".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_max_length_counts_characters() {
        assert!(validate_max_length("hello", 5).is_ok());
        assert!(validate_max_length("héllo", 5).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("x", "Name").is_ok());
        assert_eq!(validate_not_blank("   ", "Name").unwrap_err(), "Name cannot be blank");
    }

    #[test]
    fn test_username() {
        assert!(validate_username("  ada  ").is_ok());
        assert!(validate_username(" \t ").is_err());
        assert!(validate_username(&"u".repeat(65)).is_err());
    }
}
