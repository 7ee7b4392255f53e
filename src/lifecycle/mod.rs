//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Check target → Load registry → Resolve endpoint → Connect
//! ```
//!
//! # Design Decisions
//! - Ordered startup: checks that need no network run first
//! - Any startup error is fatal; the scan never starts

pub mod startup;

pub use startup::{prepare, Prepared, StartupError, StartupOptions};
