//! Requiredness and concrete scenarios across the whole field catalog

use chrono::{Datelike, Local, NaiveDate};
use formguard::fields::{self, Address, ConfirmPasswordOptions, DateOptions, PostalCodeOptions};
use formguard::shared::TOOLTIP_OWNER;
use formguard::{Form, Signal, Validatable, ValidationOptions};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Every catalog field over a blank input, required or not
fn blank_field(name: &str, required: bool) -> Box<dyn Validatable> {
    let base = ValidationOptions::default().required(required);
    let original = Some("Abc12345678!".to_string());

    match name {
        "email" => Box::new(fields::email("", base)),
        "phone" => Box::new(fields::phone("", base)),
        "username" => Box::new(fields::username("", base)),
        "password" => Box::new(fields::password("", base.with_field(Default::default()))),
        "confirm-password" => Box::new(fields::confirm_password(
            "",
            base.with_field(ConfirmPasswordOptions::new(original)),
        )),
        "ssn" => Box::new(fields::ssn("", base)),
        "postal-code" => Box::new(fields::postal_code(
            "",
            base.with_field(PostalCodeOptions::new("CA")),
        )),
        "birth-year" => Box::new(fields::birth_year("", base.with_field(DateOptions::default()))),
        "date-of-birth" => Box::new(fields::date_of_birth(
            "",
            base.with_field(DateOptions::default()),
        )),
        "street" => Box::new(fields::street("", base)),
        "city" => Box::new(fields::city("", base)),
        "state" => Box::new(fields::state("", base)),
        "country" => Box::new(fields::country("", base)),
        "card-number" => Box::new(fields::card_number("", base)),
        "card-expiry" => Box::new(fields::card_expiry("", base.with_field(DateOptions::default()))),
        "card-cvc" => Box::new(fields::card_cvc("", base)),
        "address" => Box::new(fields::address(Address::default(), base)),
        other => panic!("unknown field {other}"),
    }
}

#[test]
fn optional_blank_fields_are_always_valid() {
    for name in fields::FIELD_NAMES {
        let field = blank_field(name, false);
        assert_eq!(field.validate(), None, "{name}");
    }
}

#[test]
fn required_blank_fields_always_fail() {
    for name in fields::FIELD_NAMES {
        let field = blank_field(name, true);
        assert!(field.validate().is_some(), "{name}");
    }
}

#[test]
fn requiredness_can_change_between_runs() {
    let required = Signal::new(false);
    let session = fields::ssn("", ValidationOptions::default().required(required.reader()));
    assert_eq!(session.validate(), None);

    required.set(true);
    assert_eq!(session.validate(), Some("SSN is required".to_string()));
}

#[test]
fn password_scenarios() {
    let err = fields::password("Short1!", ValidationOptions::default())
        .validate()
        .unwrap();
    assert!(err.contains("12") && err.contains("256"), "{err}");

    assert_eq!(
        fields::password("LongEnough123!", ValidationOptions::default()).validate(),
        None
    );
}

#[rstest]
#[case("123-45-6789", true)]
#[case("12-345-6789", false)]
#[case("١٢٣-٤٥-٦٧٨٩", false)]
fn ssn_scenarios(#[case] input: &str, #[case] valid: bool) {
    let session = fields::ssn(input, ValidationOptions::default());
    assert_eq!(session.validate().is_none(), valid);
}

#[test]
fn confirm_password_scenarios() {
    let options = || {
        ValidationOptions::new(ConfirmPasswordOptions::new(Some("Abc12345678!".to_string())))
    };
    assert_eq!(fields::confirm_password("Abc12345678!", options()).validate(), None);
    assert_eq!(
        fields::confirm_password("different", options()).validate(),
        Some("Passwords do not match".to_string())
    );
}

#[test]
fn birth_year_scenarios() {
    let current = Local::now().year();
    let validate = |year: i32| {
        fields::birth_year(year.to_string(), ValidationOptions::default()).validate()
    };

    assert!(validate(current - 10).unwrap().contains("13"));
    assert!(validate(current - 16).unwrap().contains("18"));
    assert_eq!(validate(current - 30), None);
}

#[rstest]
#[case("1234", false)]
#[case("12345", true)]
#[case("١٢٣٤٥", false)]
fn zip_scenarios(#[case] input: &str, #[case] valid: bool) {
    let session = fields::postal_code(input, ValidationOptions::default());
    assert_eq!(session.validate().is_none(), valid);
}

#[test]
fn checkout_form_gates_submission() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let number = Signal::new("4242 4242 4242 4242".to_string());
    let expiry = Signal::new("09/26".to_string());

    let form = Form::new()
        .field("number", fields::card_number(number.reader(), ValidationOptions::default()))
        .field(
            "expiry",
            fields::card_expiry(expiry.reader(), ValidationOptions::new(DateOptions::fixed(today))),
        )
        .field("cvc", fields::card_cvc("123", ValidationOptions::default()));

    let errors = form.validate_all();
    assert_eq!(errors.get_error("expiry"), Some(&"Card has expired".to_string()));
    assert!(errors.clone().into_result().is_err());

    expiry.set("11/27".to_string());
    assert!(form.validate_all().into_result().is_ok());
}

#[test]
fn only_one_tooltip_is_active() {
    TOOLTIP_OWNER.activate(Some("ssn-help"));
    let previous = TOOLTIP_OWNER.activate(Some("zip-help"));
    assert_eq!(previous.as_deref(), Some("ssn-help"));
    assert!(TOOLTIP_OWNER.is_active("zip-help"));
    assert!(!TOOLTIP_OWNER.is_active("ssn-help"));
    TOOLTIP_OWNER.activate(None);
}
