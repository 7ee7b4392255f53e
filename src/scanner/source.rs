//! Block sources the scan engine reads from.

use alloy::consensus::Transaction;
use alloy::network::TransactionResponse;
use alloy::primitives::Address;
use alloy::rpc::types::Block;

use crate::blockchain::{BlockchainClient, BlockchainResult};

/// The transaction fields the scan engine looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedTransaction {
    pub from: Address,
    /// `None` for contract creation.
    pub to: Option<Address>,
}

/// Anything that can report a chain head and hand out block contents.
#[allow(async_fn_in_trait)]
pub trait BlockSource {
    /// Current head height.
    async fn latest_block_number(&self) -> BlockchainResult<u64>;

    /// Transactions of block `number`, in block order.
    async fn block_transactions(&self, number: u64) -> BlockchainResult<Vec<ObservedTransaction>>;
}

impl BlockSource for BlockchainClient {
    async fn latest_block_number(&self) -> BlockchainResult<u64> {
        self.get_block_number().await
    }

    async fn block_transactions(&self, number: u64) -> BlockchainResult<Vec<ObservedTransaction>> {
        let block = self.get_block(number).await?;
        Ok(observed_transactions(&block))
    }
}

fn observed_transactions(block: &Block) -> Vec<ObservedTransaction> {
    block
        .transactions
        .txns()
        .map(|tx| ObservedTransaction {
            from: TransactionResponse::from(tx),
            to: Transaction::to(tx),
        })
        .collect()
}
