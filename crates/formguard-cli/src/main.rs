mod catalog;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formguard")]
#[command(version, about = "formguard CLI - validate form field values", long_about = None)]
struct Cli {
    /// Config file (default: ./formguard.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single value against a catalog field
    Check {
        /// Field name (see `formguard fields`)
        field: String,

        /// Value to validate
        #[arg(default_value = "")]
        value: String,

        #[command(flatten)]
        args: FieldArgs,
    },

    /// Read values from stdin, one per line, validating with debounce
    Watch {
        /// Field name (see `formguard fields`)
        field: String,

        #[command(flatten)]
        args: FieldArgs,
    },

    /// List catalog fields
    Fields,

    /// Print the effective configuration
    Config,
}

/// Options shared by commands that build a field session
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Treat the field as optional (blank values pass)
    #[arg(long)]
    pub optional: bool,

    /// Original password, for confirm-password
    #[arg(long)]
    pub original: Option<String>,

    /// Country code for postal-code (defaults to the configured country)
    #[arg(long)]
    pub country: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = commands::config::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Check { field, value, args } => {
            let valid = commands::check::execute(&config, &field, &value, &args)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Watch { field, args } => {
            commands::watch::execute(&config, &field, &args)?;
        }
        Commands::Fields => {
            commands::fields::execute();
        }
        Commands::Config => {
            commands::config::execute(&config)?;
        }
    }

    Ok(())
}
