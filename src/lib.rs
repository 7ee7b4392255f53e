//! Contract signature scanner library.
//!
//! Scans a window of recent Ethereum blocks for transactions sent to a
//! contract and reports how many distinct senders ("signatures") it saw and
//! what share of them is new.

pub mod blockchain;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod scanner;

pub use blockchain::BlockchainClient;
pub use config::ScannerConfig;
pub use scanner::{ScanEngine, ScanResult};
