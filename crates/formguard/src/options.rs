//! Validation options shared by every session, plus per-field option records

use std::time::Duration;

use crate::signal::Dynamic;

/// Quiet period before a debounced validation runs
pub const DEFAULT_DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Auxiliary, validator-specific options
///
/// Each field validator declares its own record of recognized keys. Entries
/// may be [`Dynamic`]; `resolve` reads them all at validation time.
pub trait FieldOptions: Send + Sync + 'static {
    type Resolved;

    fn resolve(&self) -> Self::Resolved;
}

/// For validators without auxiliary options
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptions;

impl FieldOptions for NoOptions {
    type Resolved = ();

    fn resolve(&self) -> Self::Resolved {}
}

/// Options for one validation session
#[derive(Debug, Clone)]
pub struct ValidationOptions<O = NoOptions> {
    /// Delay between the last `validate_debounced` call and the run
    pub debounce_timeout: Duration,

    /// Whether an empty value is an error (default: true)
    pub is_required: Dynamic<bool>,

    /// Validator-specific options
    pub field: O,
}

impl<O: Default> Default for ValidationOptions<O> {
    fn default() -> Self {
        Self {
            debounce_timeout: DEFAULT_DEBOUNCE_TIMEOUT,
            is_required: Dynamic::Static(true),
            field: O::default(),
        }
    }
}

impl<O> ValidationOptions<O> {
    pub fn new(field: O) -> Self {
        Self {
            debounce_timeout: DEFAULT_DEBOUNCE_TIMEOUT,
            is_required: Dynamic::Static(true),
            field,
        }
    }

    pub fn debounce_timeout(mut self, timeout: Duration) -> Self {
        self.debounce_timeout = timeout;
        self
    }

    pub fn required(mut self, is_required: impl Into<Dynamic<bool>>) -> Self {
        self.is_required = is_required.into();
        self
    }

    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Swaps in a different field option record, keeping the shared settings
    pub fn with_field<P>(self, field: P) -> ValidationOptions<P> {
        ValidationOptions {
            debounce_timeout: self.debounce_timeout,
            is_required: self.is_required,
            field,
        }
    }
}

/// Options after resolving every dynamic entry, as handed to a validator
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<R = ()> {
    pub is_required: bool,
    pub field: R,
}

impl<O: FieldOptions> ValidationOptions<O> {
    pub fn resolve(&self) -> Resolved<O::Resolved> {
        Resolved {
            is_required: self.is_required.get(),
            field: self.field.resolve(),
        }
    }
}
