use anyhow::{Context, Result};
use colored::Colorize;
use formguard::{FormguardConfig, Signal};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::catalog::build_session;
use crate::FieldArgs;

/// Feeds stdin lines into a field as successive edits
///
/// Each line triggers a debounced validation; error changes are printed as
/// they happen. At end of input the field is validated once more immediately,
/// the way a form validates on submit.
pub fn execute(config: &FormguardConfig, field: &str, args: &FieldArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let stdin = BufReader::new(tokio::io::stdin());
        run(config, field, args, stdin).await
    })?;
    Ok(())
}

/// Returns the submit-time validation result
async fn run<R>(config: &FormguardConfig, field: &str, args: &FieldArgs, reader: R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let input = Signal::new(String::new());
    let session = build_session(config, field, &input, args)?;
    let mut errors = session.subscribe_error();

    println!(
        "{} Watching {} (debounce {} ms), one value per line, Ctrl-D to submit",
        "👀".cyan(),
        field.cyan(),
        config.validation.debounce_timeout_ms
    );

    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read stdin")? {
                    Some(line) => {
                        input.set(line);
                        session.validate_debounced();
                    }
                    None => break,
                }
            }
            changed = errors.changed() => {
                // the session owns the sender, so this only fails once it is gone
                if changed.is_err() {
                    break;
                }
                report(&errors.borrow_and_update());
            }
        }
    }

    println!("{}", "Submitting...".green().bold());
    let result = session.validate();
    report(&result);
    Ok(result)
}

fn report(error: &Option<String>) {
    match error {
        None => println!("  {} valid", "✓".green()),
        Some(error) => println!("  {} {}", "✗".red(), error),
    }
}
