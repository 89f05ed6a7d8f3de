//! Address part validation: postal code, street, city, state, country

use once_cell::sync::Lazy;
use regex::Regex;

static US_ZIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip pattern compiles"));
static CA_POSTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z][ -]?[0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
        .expect("ca postal pattern compiles")
});
static GB_POSTCODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}$").expect("gb postcode pattern compiles")
});
static FIVE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("five digit pattern compiles"));
static FOUR_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("four digit pattern compiles"));
static GENERIC_POSTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9][A-Z0-9 -]{1,8}[A-Z0-9]$").expect("generic postal pattern compiles")
});

static CITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}][\p{L} .'-]{0,49}$").expect("city pattern compiles"));
static STREET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}0-9][\p{L}0-9 .,'#/-]{2,99}$").expect("street pattern compiles")
});
static TWO_LETTER_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("code pattern compiles"));

/// Postal code pattern for a two-letter country code
///
/// Unknown countries fall back to a permissive 3-10 character alphanumeric shape.
fn postal_pattern(country: &str) -> &'static Regex {
    match country.to_ascii_uppercase().as_str() {
        "US" => &US_ZIP,
        "CA" => &CA_POSTAL,
        "GB" | "UK" => &GB_POSTCODE,
        "DE" | "FR" => &FIVE_DIGITS,
        "AU" => &FOUR_DIGITS,
        _ => &GENERIC_POSTAL,
    }
}

/// Validates a postal code for the given country
pub fn validate_postal_code(code: &str, country: &str) -> Result<(), String> {
    let normalized = code.trim().to_ascii_uppercase();

    if postal_pattern(country).is_match(&normalized) {
        return Ok(());
    }

    if country.eq_ignore_ascii_case("US") {
        if normalized.len() < 5 {
            return Err("ZIP code must be at least 5 digits".to_string());
        }
        return Err("ZIP code must be 5 digits (optionally followed by -XXXX)".to_string());
    }

    Err("Please enter a valid postal code".to_string())
}

pub fn validate_city(city: &str) -> Result<(), String> {
    if CITY_REGEX.is_match(city.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid city".to_string())
    }
}

pub fn validate_street(street: &str) -> Result<(), String> {
    if STREET_REGEX.is_match(street.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid street address".to_string())
    }
}

/// Validates a two-letter state code
pub fn validate_state(state: &str) -> Result<(), String> {
    if TWO_LETTER_CODE.is_match(state.trim()) {
        Ok(())
    } else {
        Err("State must be a 2-letter code".to_string())
    }
}

/// Validates a two-letter country code
pub fn validate_country(country: &str) -> Result<(), String> {
    if TWO_LETTER_CODE.is_match(country.trim()) {
        Ok(())
    } else {
        Err("Country must be a 2-letter code".to_string())
    }
}
