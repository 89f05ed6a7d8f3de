use anyhow::Result;
use colored::Colorize;
use formguard::{FormguardConfig, Signal};

use crate::catalog::build_session;
use crate::FieldArgs;

/// Validates `value` as `field`; returns whether it passed
pub fn execute(config: &FormguardConfig, field: &str, value: &str, args: &FieldArgs) -> Result<bool> {
    let input = Signal::new(value.to_string());
    let session = build_session(config, field, &input, args)?;

    match session.validate() {
        None => {
            println!("{} {} is valid", "✓".green(), field.cyan());
            Ok(true)
        }
        Some(error) => {
            println!("{} {}: {}", "✗".red(), field.cyan(), error);
            Ok(false)
        }
    }
}
