//! Form-level aggregation of field sessions

use std::collections::BTreeMap;

use tokio::sync::watch;
use tracing::debug;

use crate::options::FieldOptions;
use crate::session::ValidationSession;

/// A field that can take part in a [`Form`]
pub trait Validatable: Send + Sync {
    fn validate(&self) -> Option<String>;

    fn validate_debounced(&self);

    fn error(&self) -> Option<String>;

    fn subscribe_error(&self) -> watch::Receiver<Option<String>>;
}

impl<V, O> Validatable for ValidationSession<V, O>
where
    V: Clone + Send + Sync + 'static,
    O: FieldOptions,
{
    fn validate(&self) -> Option<String> {
        ValidationSession::validate(self)
    }

    fn validate_debounced(&self) {
        ValidationSession::validate_debounced(self)
    }

    fn error(&self) -> Option<String> {
        ValidationSession::error(self)
    }

    fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        ValidationSession::subscribe_error(self)
    }
}

/// Errors collected from a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field)
    }

    /// Converts into a `Result`, for gating submission with `?`
    pub fn into_result(self) -> Result<(), BTreeMap<String, String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// A set of named field sessions validated together before submission
#[derive(Default)]
pub struct Form {
    fields: Vec<(String, Box<dyn Validatable>)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field; fields are validated in insertion order
    pub fn field(mut self, name: impl Into<String>, session: impl Validatable + 'static) -> Self {
        self.fields.push((name.into(), Box::new(session)));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates every field immediately
    pub fn validate_all(&self) -> FormErrors {
        let errors: BTreeMap<String, String> = self
            .fields
            .iter()
            .filter_map(|(name, field)| field.validate().map(|err| (name.clone(), err)))
            .collect();

        debug!(fields = self.fields.len(), invalid = errors.len(), "form validated");
        FormErrors { errors }
    }

    pub fn validate_all_debounced(&self) {
        for (_, field) in &self.fields {
            field.validate_debounced();
        }
    }

    /// Current errors without re-running any validator
    pub fn errors(&self) -> FormErrors {
        let errors = self
            .fields
            .iter()
            .filter_map(|(name, field)| field.error().map(|err| (name.clone(), err)))
            .collect();
        FormErrors { errors }
    }

    /// First error in field order
    pub fn first_error(&self) -> Option<(&str, String)> {
        self.fields
            .iter()
            .find_map(|(name, field)| field.error().map(|err| (name.as_str(), err)))
    }

    pub fn is_valid(&self) -> bool {
        self.validate_all().is_valid()
    }
}
