//! Observability error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    /// A global subscriber is already installed.
    #[error("logging is already initialized")]
    AlreadyInitialized,

    /// The level string is not a known log level.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}
