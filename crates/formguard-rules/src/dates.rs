//! Birth year and date-of-birth validation
//!
//! All checks take `today` explicitly so callers decide which clock applies.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Earliest accepted birth year
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Age below which an account cannot be created at all
pub const MINIMUM_ACCOUNT_AGE: i32 = 13;

/// Age of majority, required for identity and billing features
pub const ADULT_AGE: i32 = 18;

/// Oldest accepted age for a date of birth
pub const MAXIMUM_AGE: i32 = 100;

static DOB_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("dob pattern compiles"));

/// Full years elapsed between `born` and `today`
pub fn age_in_years(born: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}

/// Validates a four-digit birth year and applies the age gates
pub fn validate_birth_year(value: &str, today: NaiveDate) -> Result<(), String> {
    let year: i32 = value
        .trim()
        .parse()
        .map_err(|_| "Birth year must be a number".to_string())?;

    if year < MIN_BIRTH_YEAR {
        return Err(format!("Birth year must be {} or later", MIN_BIRTH_YEAR));
    }

    let delta = today.year() - year;
    if delta < 0 {
        return Err("Birth year cannot be in the future".to_string());
    }
    if delta < MINIMUM_ACCOUNT_AGE {
        return Err(format!(
            "You must be at least {} years old to create an account",
            MINIMUM_ACCOUNT_AGE
        ));
    }
    if delta < ADULT_AGE {
        return Err(format!(
            "You must be at least {} years old to use this feature",
            ADULT_AGE
        ));
    }

    Ok(())
}

/// Parses a strict `MM-DD-YYYY` date
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    if !DOB_REGEX.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%m-%d-%Y").ok()
}

/// Validates a `MM-DD-YYYY` date of birth for an age between 18 and 100
pub fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<(), String> {
    let born = parse_date_of_birth(value.trim())
        .ok_or_else(|| "Please enter a valid date (MM-DD-YYYY)".to_string())?;

    let age = age_in_years(born, today);
    if age < ADULT_AGE {
        return Err(format!("You must be at least {} years old", ADULT_AGE));
    }
    if age > MAXIMUM_AGE {
        return Err("Please enter a valid date of birth".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn test_age_in_years_respects_birthday() {
        let born = NaiveDate::from_ymd_opt(2000, 6, 16).unwrap();
        assert_eq!(age_in_years(born, today()), 25);
        let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert_eq!(age_in_years(born, today()), 26);
    }

    #[test]
    fn test_birth_year_gates() {
        assert!(validate_birth_year("1996", today()).is_ok());
        assert!(validate_birth_year("2016", today()).unwrap_err().contains("13"));
        assert!(validate_birth_year("2010", today()).unwrap_err().contains("18"));
        assert!(validate_birth_year("1899", today()).unwrap_err().contains("1900"));
        assert!(validate_birth_year("2027", today()).unwrap_err().contains("future"));
        assert_eq!(
            validate_birth_year("19x6", today()).unwrap_err(),
            "Birth year must be a number"
        );
    }

    #[test]
    fn test_date_of_birth_format_is_strict() {
        assert!(parse_date_of_birth("01-31-1990").is_some());
        assert!(parse_date_of_birth("1-31-1990").is_none());
        assert!(parse_date_of_birth("1990-01-31").is_none());
        assert!(parse_date_of_birth("02-30-1990").is_none());
        assert!(parse_date_of_birth("٠١-٣١-١٩٩٠").is_none());
    }

    #[test]
    fn test_date_of_birth_age_window() {
        assert!(validate_date_of_birth("06-15-2008", today()).is_ok());
        assert!(validate_date_of_birth("06-16-2008", today()).unwrap_err().contains("18"));
        assert!(validate_date_of_birth("06-15-1926", today()).is_ok());
        assert!(validate_date_of_birth("06-14-1925", today()).is_err());
    }
}
