//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ScannerConfig (validated, immutable)
//!
//! credential environment variable
//!     → endpoint.rs (substitute into endpoint template)
//!     → Url handed to the blockchain client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the tool runs with no config file
//! - Validation separates syntactic (serde) from semantic checks
//! - Credentials come only from the environment, never from the file

pub mod endpoint;
pub mod loader;
pub mod schema;
pub mod validation;

pub use endpoint::resolve_endpoint_with;
pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{LoggingConfig, NodeConfig, ScanConfig, ScannerConfig};
