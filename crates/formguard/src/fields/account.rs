//! Account fields: email, phone, username, password and its confirmation

use std::ops::RangeInclusive;

use formguard_rules as rules;

use crate::blank::Blank;
use crate::options::{FieldOptions, Resolved, ValidationOptions};
use crate::session::{required_error, ValidationSession};
use crate::signal::Dynamic;

pub fn email_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Email is required");
    }
    rules::validate_email(value).err()
}

pub fn email(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, email_rule)
}

pub fn phone_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Phone number is required");
    }
    rules::validate_phone(value).err()
}

pub fn phone(input: impl Into<Dynamic<String>>, options: ValidationOptions) -> ValidationSession<String> {
    ValidationSession::new(input, options, phone_rule)
}

pub fn username_rule(value: &String, options: &Resolved) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Username is required");
    }
    rules::validate_username(value).err()
}

pub fn username(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions,
) -> ValidationSession<String> {
    ValidationSession::new(input, options, username_rule)
}

/// Password policy options
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    /// Accepted length in characters (default: 12..=256)
    pub length: RangeInclusive<usize>,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: rules::PASSWORD_LENGTH,
        }
    }
}

impl FieldOptions for PasswordOptions {
    type Resolved = RangeInclusive<usize>;

    fn resolve(&self) -> Self::Resolved {
        self.length.clone()
    }
}

pub fn password_rule(value: &String, options: &Resolved<RangeInclusive<usize>>) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Password is required");
    }
    rules::validate_password(value, options.field.clone()).err()
}

pub fn password(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions<PasswordOptions>,
) -> ValidationSession<String, PasswordOptions> {
    ValidationSession::new(input, options, password_rule)
}

/// Options for the confirm-password field
#[derive(Debug, Clone, Default)]
pub struct ConfirmPasswordOptions {
    /// The password being confirmed; usually the password field's signal
    pub original_password: Dynamic<Option<String>>,
}

impl ConfirmPasswordOptions {
    pub fn new(original_password: impl Into<Dynamic<Option<String>>>) -> Self {
        Self {
            original_password: original_password.into(),
        }
    }

    /// Confirms against a password signal
    pub fn matching(original: &crate::Signal<String>) -> Self {
        let original = original.clone();
        Self::new(Dynamic::computed(move || Some(original.get())))
    }
}

impl FieldOptions for ConfirmPasswordOptions {
    type Resolved = Option<String>;

    fn resolve(&self) -> Self::Resolved {
        self.original_password.get()
    }
}

pub fn confirm_password_rule(value: &String, options: &Resolved<Option<String>>) -> Option<String> {
    if value.is_blank() {
        return required_error(options, "Please confirm your password");
    }
    rules::validate_password_match(value, options.field.as_deref()).err()
}

pub fn confirm_password(
    input: impl Into<Dynamic<String>>,
    options: ValidationOptions<ConfirmPasswordOptions>,
) -> ValidationSession<String, ConfirmPasswordOptions> {
    ValidationSession::new(input, options, confirm_password_rule)
}
