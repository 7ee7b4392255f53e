//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate the target address
//! - Load the known-signature registry, if one was given
//! - Resolve the endpoint from the access credential
//! - Connect to the node
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Steps run in order; nothing touches the network until the local checks pass
//! - Environment access is injected so the sequence runs unchanged in tests

use std::path::Path;

use thiserror::Error;

use crate::blockchain::{normalize_address, AddressError, BlockchainClient, BlockchainError};
use crate::config::{resolve_endpoint_with, ConfigError, NodeConfig};
use crate::scanner::{RegistryError, SignatureRegistry};

/// Inputs of the startup sequence taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct StartupOptions<'a> {
    pub contract: &'a str,
    pub known: Option<&'a Path>,
}

/// Everything the scan needs once startup succeeded.
#[derive(Debug)]
pub struct Prepared {
    pub client: BlockchainClient,
    pub registry: Option<SignatureRegistry>,
}

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid target address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Connection(#[from] BlockchainError),
}

/// Run the startup sequence against `config`, reading environment
/// variables through `lookup`.
pub async fn prepare<F>(
    config: &NodeConfig,
    options: StartupOptions<'_>,
    lookup: F,
) -> Result<Prepared, StartupError>
where
    F: Fn(&str) -> Option<String>,
{
    normalize_address(options.contract)?;

    let registry = options
        .known
        .map(SignatureRegistry::load_from_file)
        .transpose()?;

    let url = resolve_endpoint_with(config, lookup)?;
    let client = BlockchainClient::connect(url, config).await?;

    Ok(Prepared { client, registry })
}
