//! Field validator catalog
//!
//! Every field comes as a pure `*_rule` function plus a constructor returning
//! a [`ValidationSession`](crate::ValidationSession) wired to that rule. Each
//! rule starts with the required-field short-circuit: a blank value is an
//! error only when the field is required.

pub mod account;
pub mod address;
pub mod billing;
pub mod identity;

pub use account::*;
pub use address::*;
pub use billing::*;
pub use identity::*;

use chrono::{Local, NaiveDate};

use crate::options::FieldOptions;
use crate::signal::Dynamic;

/// Options for validators that compare against the current date
#[derive(Debug, Clone)]
pub struct DateOptions {
    /// Today's date (default: local calendar date at validation time)
    pub today: Dynamic<NaiveDate>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            today: Dynamic::computed(|| Local::now().date_naive()),
        }
    }
}

impl DateOptions {
    pub fn fixed(today: NaiveDate) -> Self {
        Self {
            today: Dynamic::Static(today),
        }
    }
}

impl FieldOptions for DateOptions {
    type Resolved = NaiveDate;

    fn resolve(&self) -> NaiveDate {
        self.today.get()
    }
}

/// Names of every field in the catalog
pub const FIELD_NAMES: &[&str] = &[
    "email",
    "phone",
    "username",
    "password",
    "confirm-password",
    "ssn",
    "postal-code",
    "birth-year",
    "date-of-birth",
    "street",
    "city",
    "state",
    "country",
    "card-number",
    "card-expiry",
    "card-cvc",
    "address",
];
