//! Identity fields: SSN, birth year and date of birth

use chrono::NaiveDate;
use formguard_rules as rules;

use super::DateOptions;
use crate::blank::Blank;
use crate::options::{Resolved, ValidationOptions};
use crate::session::{required_error, ValidationSession};
use crate::signal::Dynamic;

pub fn ssn_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "SSN is required");
    }
    rules::validate_ssn(value).err()
}

pub fn ssn(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, ssn_rule)
}

pub fn birth_year_rule(value: &String, options: &Resolved<NaiveDate>) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Birth year is required");
    }
    rules::validate_birth_year(value, options.field).err()
}

pub fn birth_year(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions<DateOptions>,
) -> ValidationSession<String, DateOptions> {
    ValidationSession::new(input, options, birth_year_rule)
}

pub fn date_of_birth_rule(value: &String, options: &Resolved<NaiveDate>) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Date of birth is required");
    }
    rules::validate_date_of_birth(value, options.field).err()
}

pub fn date_of_birth(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions<DateOptions>,
) -> ValidationSession<String, DateOptions> {
    ValidationSession::new(input, options, date_of_birth_rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local};

    #[test]
    fn test_ssn_scenarios() {
        assert_eq!(ssn("123-45-6789", ValidationOptions::default()).validate(), None);
        assert!(ssn("12-345-6789", ValidationOptions::default()).validate().is_some());
    }

    #[test]
    fn test_birth_year_against_current_year() {
        let year = Local::now().year();
        let check = |offset: i32| {
            birth_year((year - offset).to_string(), ValidationOptions::default()).validate()
        };

        assert!(check(10).unwrap().contains("13"));
        assert!(check(16).unwrap().contains("18"));
        assert_eq!(check(30), None);
    }

    #[test]
    fn test_date_of_birth_with_fixed_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let options = ValidationOptions::new(DateOptions::fixed(today));
        assert_eq!(date_of_birth("12-31-2007", options.clone()).validate(), None);
        assert!(date_of_birth("01-02-2008", options.clone()).validate().is_some());
        assert!(date_of_birth("2007-12-31", options).validate().is_some());
    }
}
