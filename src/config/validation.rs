//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, scan depth > 0)
//! - Check the endpoint template can actually carry a credential
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ScannerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{ScannerConfig, CREDENTIAL_MARKER};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("node.endpoint_template must contain '{{credential}}' when node.rpc_url is unset")]
    MissingCredentialMarker,

    #[error("node.rpc_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("scan.default_blocks must be greater than zero")]
    ZeroBlocks,

    #[error("logging.level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ScannerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.node.rpc_url.is_none() && !config.node.endpoint_template.contains(CREDENTIAL_MARKER) {
        errors.push(ValidationError::MissingCredentialMarker);
    }
    if config.node.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.scan.default_blocks == 0 {
        errors.push(ValidationError::ZeroBlocks);
    }
    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
