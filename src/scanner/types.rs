//! Scan window, result and error types.

use std::collections::BTreeSet;

use alloy::primitives::Address;
use thiserror::Error;

use crate::blockchain::{AddressError, BlockchainError};

/// Inclusive range of block heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: u64,
    pub end: u64,
}

impl ScanWindow {
    /// The `count` most recent heights ending at `latest`, clamped at genesis.
    ///
    /// `count` must be positive.
    pub fn ending_at(latest: u64, count: u64) -> Self {
        debug_assert!(count > 0);
        Self {
            start: latest.saturating_sub(count.saturating_sub(1)),
            end: latest,
        }
    }

    /// Number of heights in the window.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Always false: a window holds at least one height. Present because
    /// clippy's `len_without_is_empty` wants it next to `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn heights(&self) -> std::ops::RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// A block whose fetch failed and was left out of the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub number: u64,
    pub reason: String,
}

/// Aggregated output of one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub target: Address,
    pub window: ScanWindow,
    /// Transactions addressed to the target, counting repeat senders.
    pub total_interactions: u64,
    /// Unique senders, ordered for stable output.
    pub signatures: BTreeSet<Address>,
    /// Senders not present in the known registry.
    pub new_signatures: usize,
    pub skipped: Vec<SkippedBlock>,
}

impl ScanResult {
    pub fn unique_signatures(&self) -> usize {
        self.signatures.len()
    }

    /// Share of unique senders that are new, in percent. Zero when no sender was seen.
    pub fn new_signature_index(&self) -> f64 {
        let unique = self.unique_signatures();
        if unique == 0 {
            0.0
        } else {
            self.new_signatures as f64 / unique as f64 * 100.0
        }
    }

    /// Blocks actually counted.
    pub fn scanned_blocks(&self) -> u64 {
        self.window.len() - self.skipped.len() as u64
    }
}

/// Fatal scan errors. Per-block failures are not errors, they end up in
/// [`ScanResult::skipped`].
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid target address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Block count must be a positive integer")]
    InvalidBlockCount,

    #[error("Failed to read chain head: {0}")]
    Head(#[source] BlockchainError),
}
