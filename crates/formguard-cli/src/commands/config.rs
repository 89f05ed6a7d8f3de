use std::path::Path;

use anyhow::{Context, Result};
use formguard::FormguardConfig;
use tracing::debug;

/// Loads the config from `path`, or ./formguard.toml when no path is given
pub fn load(path: Option<&Path>) -> Result<FormguardConfig> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {:?}", path);
            }
            FormguardConfig::load(path)?
        }
        None => FormguardConfig::load_default()?,
    };
    debug!(?config, "configuration loaded");
    Ok(config)
}

pub fn execute(config: &FormguardConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
