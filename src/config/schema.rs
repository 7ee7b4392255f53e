//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the scanner.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Marker replaced by the access credential in [`NodeConfig::endpoint_template`].
pub const CREDENTIAL_MARKER: &str = "{credential}";

/// Root configuration for the scanner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScannerConfig {
    /// RPC node settings.
    pub node: NodeConfig,

    /// Scan window settings.
    pub scan: ScanConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// JSON-RPC node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Endpoint URL with a `{credential}` marker for the access key.
    pub endpoint_template: String,

    /// Environment variable holding the access key.
    pub credential_env: String,

    /// Value shipped in sample env files; treated the same as a missing key.
    pub placeholder: String,

    /// Explicit endpoint URL. When set, no credential is required.
    pub rpc_url: Option<String>,

    /// Expected chain ID (e.g., 1 for Ethereum mainnet). Unchecked when absent.
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            endpoint_template: format!("https://mainnet.infura.io/v3/{}", CREDENTIAL_MARKER),
            credential_env: "INFURA_PROJECT_ID".to_string(),
            placeholder: "YOUR_INFURA_PROJECT_ID_HERE".to_string(),
            rpc_url: None,
            chain_id: None,
            rpc_timeout_secs: 30,
        }
    }
}

/// Scan window configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Number of blocks scanned when `--blocks` is not given.
    pub default_blocks: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_blocks: 1000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
