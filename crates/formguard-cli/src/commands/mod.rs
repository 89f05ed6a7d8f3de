pub mod check;
pub mod config;
pub mod fields;
pub mod watch;
