//! Sequential block range scan.
//!
//! # Responsibilities
//! - Validate the target address and scan depth before touching the node
//! - Walk `[head - count + 1, head]` one block at a time
//! - Count transactions sent to the target and collect their senders
//! - Record failed blocks and keep going
//!
//! # Design Decisions
//! - Head height is read once; blocks mined during the scan are not included
//! - No retries: a failed block is skipped and reported in the result
//! - The known-signature registry is injected, empty by default

use std::collections::BTreeSet;

use crate::blockchain::normalize_address;
use crate::scanner::registry::{EmptyRegistry, KnownSignatures};
use crate::scanner::source::BlockSource;
use crate::scanner::types::{ScanError, ScanResult, ScanWindow, SkippedBlock};

/// Scans recent blocks for transactions addressed to a contract.
#[derive(Debug, Clone, Default)]
pub struct ScanEngine<R = EmptyRegistry> {
    registry: R,
}

impl ScanEngine<EmptyRegistry> {
    /// Engine that treats every sender as new.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: KnownSignatures> ScanEngine<R> {
    /// Engine that checks senders against `registry`.
    pub fn with_registry(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Scan the `block_count` most recent blocks of `source` for
    /// transactions whose recipient is `target`.
    pub async fn scan<S: BlockSource>(
        &self,
        source: &S,
        target: &str,
        block_count: u64,
    ) -> Result<ScanResult, ScanError> {
        let target = normalize_address(target)?;
        if block_count == 0 {
            return Err(ScanError::InvalidBlockCount);
        }

        let latest = source.latest_block_number().await.map_err(ScanError::Head)?;
        let window = ScanWindow::ending_at(latest, block_count);

        tracing::info!(
            target = %target,
            start = window.start,
            end = window.end,
            blocks = window.len(),
            "Starting scan"
        );

        let mut total_interactions = 0u64;
        let mut signatures = BTreeSet::new();
        let mut skipped = Vec::new();

        for number in window.heights() {
            let transactions = match source.block_transactions(number).await {
                Ok(transactions) => transactions,
                Err(e) => {
                    tracing::warn!(block = number, error = %e, "Skipping block");
                    skipped.push(SkippedBlock {
                        number,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let mut matched = 0u64;
            for tx in transactions.iter().filter(|tx| tx.to == Some(target)) {
                matched += 1;
                signatures.insert(tx.from);
            }
            total_interactions += matched;

            tracing::debug!(
                block = number,
                transactions = transactions.len(),
                matched,
                "Block scanned"
            );
        }

        let new_signatures = signatures
            .iter()
            .filter(|address| !self.registry.is_known(address))
            .count();

        let result = ScanResult {
            target,
            window,
            total_interactions,
            signatures,
            new_signatures,
            skipped,
        };

        tracing::info!(
            interactions = result.total_interactions,
            unique = result.unique_signatures(),
            new = result.new_signatures,
            skipped = result.skipped.len(),
            "Scan complete"
        );

        Ok(result)
    }
}
