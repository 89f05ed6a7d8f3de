//! Formguard Rules
//!
//! Stateless predicate functions for every field kind the formguard catalog
//! validates. Each check returns `Ok(())` or a human-readable message; none of
//! them look at requiredness, which is decided by the caller before a rule runs.

pub mod address;
pub mod card;
pub mod dates;
pub mod email;
pub mod identity;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use address::*;
pub use card::*;
pub use dates::*;
pub use email::*;
pub use identity::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
