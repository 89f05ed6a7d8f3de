//! Bank card fields: number, expiry and security code

use chrono::NaiveDate;
use formguard_rules as rules;

use super::DateOptions;
use crate::blank::Blank;
use crate::options::{Resolved, ValidationOptions};
use crate::session::{required_error, ValidationSession};
use crate::signal::Dynamic;

pub fn card_number_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Card number is required");
    }
    rules::validate_card_number(value).err()
}

pub fn card_number(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions,
) -> ValidationSession<String> {
    ValidationSession::new(input, options, card_number_rule)
}

pub fn card_expiry_rule(value: &String, options: &Resolved<NaiveDate>) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Expiry date is required");
    }
    rules::validate_card_expiry(value, options.field).err()
}

pub fn card_expiry(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions<DateOptions>,
) -> ValidationSession<String, DateOptions> {
    ValidationSession::new(input, options, card_expiry_rule)
}

pub fn card_cvc_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Security code is required");
    }
    rules::validate_card_cvc(value).err()
}

pub fn card_cvc(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, card_cvc_rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number() {
        assert_eq!(card_number("4242 4242 4242 4242", ValidationOptions::default()).validate(), None);
        assert_eq!(
            card_number("4242 4242 4242 4241", ValidationOptions::default()).validate(),
            Some("Card number is invalid".to_string())
        );
    }

    #[test]
    fn test_card_expiry_uses_today_option() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let options = ValidationOptions::new(DateOptions::fixed(today));
        assert_eq!(card_expiry("10/26", options.clone()).validate(), None);
        assert_eq!(
            card_expiry("09/26", options).validate(),
            Some("Card has expired".to_string())
        );
    }

    #[test]
    fn test_card_cvc_lengths() {
        assert_eq!(card_cvc("123", ValidationOptions::default()).validate(), None);
        assert_eq!(card_cvc("1234", ValidationOptions::default()).validate(), None);
        assert!(card_cvc("12", ValidationOptions::default()).validate().is_some());
    }
}
