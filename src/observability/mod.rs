//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, engine, client
//!     → tracing events with structured fields
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
