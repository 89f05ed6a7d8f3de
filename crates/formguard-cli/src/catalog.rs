// File: src/catalog.rs
// Purpose: Build a field session from a field name and CLI arguments

use anyhow::{bail, Result};
use formguard::fields::{self, Address, ConfirmPasswordOptions, DateOptions, PostalCodeOptions};
use formguard::{Dynamic, FormguardConfig, NoOptions, Signal, Validatable};

use crate::FieldArgs;

/// Parses `street|city|state|country|postal_code`; missing parts stay empty
pub fn parse_address(value: &str) -> Address {
    let mut parts = value.split('|').map(|part| part.trim().to_string());
    Address {
        street: parts.next().unwrap_or_default(),
        city: parts.next().unwrap_or_default(),
        state: parts.next().unwrap_or_default(),
        country: parts.next().unwrap_or_default(),
        postal_code: parts.next().unwrap_or_default(),
    }
}

/// Creates the session for `field`, reading its input from `input`
pub fn build_session(
    config: &FormguardConfig,
    field: &str,
    input: &Signal<String>,
    args: &FieldArgs,
) -> Result<Box<dyn Validatable>> {
    let base = config.options::<NoOptions>().required(!args.optional);
    let reader = input.reader();

    let session: Box<dyn Validatable> = match field {
        "email" => Box::new(fields::email(reader, base)),
        "phone" => Box::new(fields::phone(reader, base)),
        "username" => Box::new(fields::username(reader, base)),
        "password" => Box::new(fields::password(
            reader,
            base.with_field(config.password_options().field),
        )),
        "confirm-password" => Box::new(fields::confirm_password(
            reader,
            base.with_field(ConfirmPasswordOptions::new(args.original.clone())),
        )),
        "ssn" => Box::new(fields::ssn(reader, base)),
        "postal-code" | "zip" => {
            let country = args
                .country
                .clone()
                .unwrap_or_else(|| config.validation.default_country.clone());
            Box::new(fields::postal_code(
                reader,
                base.with_field(PostalCodeOptions::new(country)),
            ))
        }
        "birth-year" => Box::new(fields::birth_year(reader, base.with_field(DateOptions::default()))),
        "date-of-birth" | "dob" => Box::new(fields::date_of_birth(
            reader,
            base.with_field(DateOptions::default()),
        )),
        "street" => Box::new(fields::street(reader, base)),
        "city" => Box::new(fields::city(reader, base)),
        "state" => Box::new(fields::state(reader, base)),
        "country" => Box::new(fields::country(reader, base)),
        "card-number" => Box::new(fields::card_number(reader, base)),
        "card-expiry" => Box::new(fields::card_expiry(reader, base.with_field(DateOptions::default()))),
        "card-cvc" => Box::new(fields::card_cvc(reader, base)),
        "address" => {
            let input = input.clone();
            let address = Dynamic::computed(move || parse_address(&input.get()));
            Box::new(fields::address(address, base))
        }
        other => bail!(
            "Unknown field '{}'. Run `formguard fields` for the list of fields",
            other
        ),
    };

    Ok(session)
}
