//! Observability setup for the Auria storefront.
//!
//! This crate provides:
//! - `LoggingConfig` - Level and output format of the process logger
//! - `init_logging` - Installs the global `tracing` subscriber

mod error;
mod logging;

pub use error::ObservabilityError;
pub use logging::*;
