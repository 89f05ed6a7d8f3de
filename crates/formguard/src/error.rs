//! Errors for the process-wide loaders
//!
//! Validation failures are never errors; they are messages in a session's
//! error slot.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoaderError {
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("{sdk} failed to initialize: {reason}")]
    InitFailed { sdk: String, reason: String },
}
