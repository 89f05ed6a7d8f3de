//! Address fields: street, city, state, country, postal code and the composite address

use formguard_rules as rules;
use serde::{Deserialize, Serialize};

use crate::blank::Blank;
use crate::options::{FieldOptions, Resolved, ValidationOptions};
use crate::session::{required_error, ValidationSession};
use crate::signal::Dynamic;

/// Country used for postal codes when none is configured
pub const DEFAULT_COUNTRY: &str = "US";

pub fn street_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Street address is required");
    }
    rules::validate_street(value).err()
}

pub fn street(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, street_rule)
}

pub fn city_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "City is required");
    }
    rules::validate_city(value).err()
}

pub fn city(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, city_rule)
}

pub fn state_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "State is required");
    }
    rules::validate_state(value).err()
}

pub fn state(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, state_rule)
}

pub fn country_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Country is required");
    }
    rules::validate_country(value).err()
}

pub fn country(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, country_rule)
}

/// Options for postal code validation
#[derive(Debug, Clone)]
pub struct PostalCodeOptions {
    /// Two-letter country whose format applies; often the country field's signal
    pub country: Dynamic<String>,
}

impl Default for PostalCodeOptions {
    fn default() -> Self {
        Self {
            country: Dynamic::Static(DEFAULT_COUNTRY.to_string()),
        }
    }
}

impl PostalCodeOptions {
    pub fn new(country: impl Into<Dynamic<String>>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

impl FieldOptions for PostalCodeOptions {
    type Resolved = String;

    fn resolve(&self) -> String {
        self.country.get()
    }
}

pub fn postal_code_rule(value: &String, options: &Resolved<String>) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Postal code is required");
    }
    let country = if options.field.trim().is_empty() {
        DEFAULT_COUNTRY
    } else {
        options.field.trim()
    };
    rules::validate_postal_code(value, country).err()
}

pub fn postal_code(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions<PostalCodeOptions>,
) -> ValidationSession<String, PostalCodeOptions> {
    ValidationSession::new(input, options, postal_code_rule)
}

/// A postal address as entered in a billing or shipping form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
}

/// Blank only when every part is empty; whitespace counts as input, as for strings
impl Blank for Address {
    fn is_blank(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.country,
            &self.postal_code,
        ]
        .iter()
        .all(|part| part.is_blank())
    }
}

/// Composite address: city, state and country must all be present
pub fn address_rule(value: &Address, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Address is required");
    }

    let missing: Vec<&str> = [
        ("city", &value.city),
        ("state", &value.state),
        ("country", &value.country),
    ]
    .into_iter()
    .filter(|(_, part)| part.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("Address is missing {}", missing.join(", ")))
    }
}

pub fn address(input: impl Into<Dynamic<Address>>, options: ValidationOptions) -> ValidationSession<Address> {
    ValidationSession::new(input, options, address_rule)
}
