// File: src/config.rs
// Purpose: Configuration parsing from formguard.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::fields::{PasswordOptions, PostalCodeOptions};
use crate::options::{NoOptions, ValidationOptions};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormguardConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub password: PasswordConfig,
}

/// Session defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Debounce quiet period in milliseconds (default: 1000)
    #[serde(default = "default_debounce_timeout_ms")]
    pub debounce_timeout_ms: u64,

    /// Country for postal code formats when the form doesn't say (default: "US")
    #[serde(default = "default_country")]
    pub default_country: String,
}

/// Password policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

// Default values
fn default_debounce_timeout_ms() -> u64 {
    1000
}

fn default_country() -> String {
    "US".to_string()
}

fn default_min_length() -> usize {
    12
}

fn default_max_length() -> usize {
    256
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            debounce_timeout_ms: default_debounce_timeout_ms(),
            default_country: default_country(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl FormguardConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Load configuration from default path (./formguard.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formguard.toml")
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormguardConfig =
            toml::from_str(content).context("Failed to parse formguard configuration")?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.password.min_length > self.password.max_length {
            anyhow::bail!(
                "password.min_length ({}) exceeds password.max_length ({})",
                self.password.min_length,
                self.password.max_length
            );
        }
        Ok(())
    }

    pub fn debounce_timeout(&self) -> Duration {
        Duration::from_millis(self.validation.debounce_timeout_ms)
    }

    /// Session options carrying the configured debounce timeout
    pub fn options<O: Default>(&self) -> ValidationOptions<O> {
        ValidationOptions::default().debounce_timeout(self.debounce_timeout())
    }

    pub fn password_options(&self) -> ValidationOptions<PasswordOptions> {
        self.options::<NoOptions>().with_field(PasswordOptions {
            length: self.password.min_length..=self.password.max_length,
        })
    }

    pub fn postal_code_options(&self) -> ValidationOptions<PostalCodeOptions> {
        self.options::<NoOptions>()
            .with_field(PostalCodeOptions::new(self.validation.default_country.clone()))
    }
}
