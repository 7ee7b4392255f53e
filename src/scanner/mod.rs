//! Contract signature scanning.
//!
//! # Data Flow
//! ```text
//! BlockSource (RPC client or in-memory chain)
//!     → engine.rs (walk window, filter by recipient, collect senders)
//!     → registry.rs (mark senders already known)
//!     → types.rs ScanResult
//!     → report.rs (text for stdout)
//! ```

pub mod engine;
pub mod registry;
pub mod report;
pub mod source;
pub mod types;

pub use engine::ScanEngine;
pub use registry::{EmptyRegistry, KnownSignatures, RegistryError, SignatureRegistry};
pub use report::{Report, Verdict};
pub use source::{BlockSource, ObservedTransaction};
pub use types::{ScanError, ScanResult, ScanWindow, SkippedBlock};
