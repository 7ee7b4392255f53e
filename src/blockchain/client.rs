//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint and verify it answers
//! - Query chain state (head height, full blocks)
//! - Bound every call with the configured timeout
//! - Keep the access credential out of logs

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use alloy::eips::BlockNumberOrTag;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::Block;
use alloy::transports::TransportResult;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::config::NodeConfig;

/// Handle to a single JSON-RPC endpoint.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    /// Endpoint with path and query stripped, safe to log.
    endpoint: String,
    timeout_duration: Duration,
    chain_id: ChainId,
}

impl BlockchainClient {
    /// Connect to `url` and verify the node answers.
    ///
    /// The handshake is a single `eth_chainId` call. There are no retries:
    /// an unreachable endpoint fails with [`BlockchainError::Connection`].
    pub async fn connect(url: Url, config: &NodeConfig) -> BlockchainResult<Self> {
        let endpoint = redact(&url);
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        let chain_id = with_timeout(timeout_duration, provider.get_chain_id())
            .await
            .map(ChainId)
            .map_err(|e| BlockchainError::Connection {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        if let Some(expected) = config.chain_id {
            if expected != chain_id.0 {
                return Err(BlockchainError::ChainMismatch {
                    expected,
                    actual: chain_id.0,
                });
            }
        }

        tracing::info!(
            endpoint = %endpoint,
            chain_id = chain_id.0,
            "Connected to Ethereum node"
        );

        Ok(Self {
            provider,
            endpoint,
            timeout_duration,
            chain_id,
        })
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        with_timeout(self.timeout_duration, self.provider.get_block_number()).await
    }

    /// Get a block with full transaction bodies.
    pub async fn get_block(&self, number: u64) -> BlockchainResult<Block> {
        let fut = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .full();
        with_timeout(self.timeout_duration, fut)
            .await?
            .ok_or(BlockchainError::BlockNotFound(number))
    }

    /// Chain ID reported during the handshake.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Endpoint without credentials.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("endpoint", &self.endpoint)
            .field("chain_id", &self.chain_id.0)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}

async fn with_timeout<T, F>(duration: Duration, fut: F) -> BlockchainResult<T>
where
    F: IntoFuture<Output = TransportResult<T>>,
{
    match timeout(duration, fut).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
        Err(_) => Err(BlockchainError::Timeout(duration.as_secs())),
    }
}

/// Strip path, query and userinfo; hosted endpoints carry the key in the path.
fn redact(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
        (Some(host), None) => format!("{}://{}", url.scheme(), host),
        _ => url.scheme().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> NodeConfig {
        NodeConfig {
            rpc_url: Some("http://127.0.0.1:1".to_string()),
            rpc_timeout_secs: 2,
            ..NodeConfig::default()
        }
    }

    #[test]
    fn test_redact_hides_credential() {
        let url: Url = "https://mainnet.infura.io/v3/abcdef1234567890".parse().unwrap();
        assert_eq!(redact(&url), "https://mainnet.infura.io");

        let url: Url = "http://localhost:8545/?key=secret".parse().unwrap();
        assert_eq!(redact(&url), "http://localhost:8545");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Port 1 is reserved and nothing listens there.
        let url: Url = "http://127.0.0.1:1".parse().unwrap();
        let err = BlockchainClient::connect(url, &test_config()).await.unwrap_err();
        assert!(matches!(
            err,
            BlockchainError::Connection { ref endpoint, .. } if endpoint == "http://127.0.0.1:1"
        ));
    }
}
