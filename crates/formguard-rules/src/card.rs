//! Bank card validation: number, expiry and security code

use chrono::{Datelike, NaiveDate};

use crate::numeric::validate_digits;

/// Luhn mod-10 checksum over a string of ASCII digits
pub fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut d) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

/// Validates a card number: 12-19 digits, separators allowed, Luhn valid
pub fn validate_card_number(number: &str) -> Result<(), String> {
    let digits: String = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Card number must contain only digits".to_string());
    }
    if !(12..=19).contains(&digits.len()) || !luhn_valid(&digits) {
        return Err("Card number is invalid".to_string());
    }

    Ok(())
}

/// Parses `MM/YY` or `MM/YYYY` into `(year, month)`
pub fn parse_card_expiry(value: &str) -> Option<(i32, u32)> {
    let (month, year) = value.trim().split_once('/')?;
    let (month, year) = (month.trim(), year.trim());

    if month.len() != 2 || !matches!(year.len(), 2 | 4) {
        return None;
    }
    if !month.chars().chain(year.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let mut year: i32 = year.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    if year < 100 {
        year += 2000;
    }

    Some((year, month))
}

/// Validates that a card expiry is well formed and not yet past
///
/// Cards are valid through the last day of their expiry month.
pub fn validate_card_expiry(value: &str, today: NaiveDate) -> Result<(), String> {
    let (year, month) =
        parse_card_expiry(value).ok_or_else(|| "Expiry must be in MM/YY format".to_string())?;

    if (year, month) < (today.year(), today.month()) {
        return Err("Card has expired".to_string());
    }

    Ok(())
}

/// Validates a card security code (CVC/CVV)
pub fn validate_card_cvc(cvc: &str) -> Result<(), String> {
    validate_digits(cvc.trim(), &[3, 4], "Security code")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("4242 4242 4242 4242", true)]
    #[case("4242-4242-4242-4242", true)]
    #[case("5555555555554444", true)]
    #[case("378282246310005", true)]
    #[case("4242424242424241", false)]
    #[case("4242", false)]
    #[case("4242 abcd 4242 4242", false)]
    fn test_card_numbers(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_card_number(input).is_ok(), valid);
    }

    #[test]
    fn test_expiry_parsing() {
        assert_eq!(parse_card_expiry("04/29"), Some((2029, 4)));
        assert_eq!(parse_card_expiry("04/2029"), Some((2029, 4)));
        assert_eq!(parse_card_expiry("13/29"), None);
        assert_eq!(parse_card_expiry("4/29"), None);
        assert_eq!(parse_card_expiry("0429"), None);
    }

    #[test]
    fn test_expiry_against_today() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        assert!(validate_card_expiry("06/26", today).is_ok());
        assert!(validate_card_expiry("07/26", today).is_ok());
        assert_eq!(validate_card_expiry("05/26", today).unwrap_err(), "Card has expired");
        assert!(validate_card_expiry("12/2025", today).is_err());
    }

    #[test]
    fn test_cvc() {
        assert!(validate_card_cvc("123").is_ok());
        assert!(validate_card_cvc("1234").is_ok());
        assert!(validate_card_cvc("12").is_err());
        assert!(validate_card_cvc("12345").is_err());
    }
}
