//! # formguard
//!
//! Debounced, reactive validation for form fields.
//!
//! A [`ValidationSession`] binds one field's input to a validator function. It
//! owns a reactive `error` slot and exposes two triggers: [`validate`] runs the
//! validator now, [`validate_debounced`] runs it once the input has been quiet
//! for the configured timeout. An immediate run always supersedes a pending
//! debounced one.
//!
//! The [`fields`] module holds the catalog of field validators (email,
//! password, SSN, postal code, bank card, ...) built on the engine.
//!
//! ## Example
//!
//! ```rust
//! use formguard::{fields, Signal, ValidationOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let password = Signal::new(String::from("Short1!"));
//!     let session = fields::password(password.reader(), ValidationOptions::default());
//!
//!     assert!(session.validate().is_some());
//!
//!     password.set("LongEnough123!".to_string());
//!     assert_eq!(session.validate(), None);
//! }
//! ```
//!
//! [`validate`]: ValidationSession::validate
//! [`validate_debounced`]: ValidationSession::validate_debounced

pub mod blank;
pub mod config;
pub mod debounce;
pub mod error;
pub mod fields;
pub mod form;
pub mod options;
pub mod session;
pub mod shared;
pub mod signal;

pub use blank::Blank;
pub use config::FormguardConfig;
pub use debounce::{Debouncer, Ticket};
pub use error::LoaderError;
pub use form::{Form, FormErrors, Validatable};
pub use options::{FieldOptions, NoOptions, Resolved, ValidationOptions, DEFAULT_DEBOUNCE_TIMEOUT};
pub use session::{create_validation, required_error, ValidationSession};
pub use signal::{Dynamic, Signal};
