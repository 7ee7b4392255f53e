//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variable (access key)
//!     → config::endpoint (endpoint URL)
//!     → client.rs (RPC connection with timeouts)
//!     → scanner (block range walk)
//! ```
//!
//! # Security Constraints
//! - Access keys ONLY from environment variables
//! - Never log the endpoint path, it carries the key
//! - All RPC calls have configurable timeouts

pub mod address;
pub mod client;
pub mod types;

pub use address::{checksummed, normalize_address, AddressError};
pub use client::BlockchainClient;
pub use types::{BlockchainError, BlockchainResult, ChainId};
