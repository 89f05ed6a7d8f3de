//! Numeric validation functions

/// Validates that a string holds only ASCII digits, with an exact set of allowed lengths
pub fn validate_digits(value: &str, lengths: &[usize], label: &str) -> Result<(), String> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("{} must contain only digits", label));
    }
    if !lengths.contains(&value.len()) {
        let allowed: Vec<String> = lengths.iter().map(|l| l.to_string()).collect();
        return Err(format!("{} must be {} digits", label, allowed.join(" or ")));
    }
    Ok(())
}
