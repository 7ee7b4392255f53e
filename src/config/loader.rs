//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ScannerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading and endpoint resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// The credential variable is unset or empty.
    #[error("{0} is not set; export it with your RPC access key")]
    MissingCredential(String),

    /// The credential variable still holds the sample value.
    #[error("{0} still holds the placeholder value; replace it with your RPC access key")]
    PlaceholderCredential(String),

    #[error("Invalid RPC endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ScannerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ScannerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the file at `path` if given, otherwise fall back to validated defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ScannerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = ScannerConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}
