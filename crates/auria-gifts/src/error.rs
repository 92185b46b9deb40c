//! Gift flow error types.

use thiserror::Error;

/// Errors the gift flow reports to its caller.
///
/// Every failure after validation is collapsed into `Unavailable`; the
/// underlying [`ServiceError`] is logged, not returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GiftError {
    /// A request field is missing or out of range.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The recommendation could not be produced.
    #[error("Sorry, we couldn't generate a recommendation at this time. Please try again later.")]
    Unavailable,
}

impl GiftError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        GiftError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Check if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, GiftError::Validation { .. })
    }
}

/// Failures talking to the generation service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Client(String),

    /// Failed to send the request or read the response.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedBody(String),

    /// The model produced no usable recommendation text.
    #[error("empty recommendation")]
    EmptyRecommendation,

    /// The prompt template failed to render.
    #[error("prompt rendering failed: {0}")]
    Template(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::MalformedBody(e.to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Transport(e.to_string())
    }
}

impl From<tera::Error> for ServiceError {
    fn from(e: tera::Error) -> Self {
        ServiceError::Template(e.to_string())
    }
}
