//! Shared error type across Lumen crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, LumenError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum LumenError {
    #[error("invalid metric name: {0:?}")]
    InvalidMetricName(String),
    #[error("invalid label name: {0:?}")]
    InvalidLabelName(String),
    #[error("duplicate label name: {0:?}")]
    DuplicateLabel(String),
    #[error("metric already registered: {0}")]
    AlreadyRegistered(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl LumenError {
    /// Stable code for logs and exit diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            LumenError::InvalidMetricName(_) => "INVALID_METRIC_NAME",
            LumenError::InvalidLabelName(_) => "INVALID_LABEL_NAME",
            LumenError::DuplicateLabel(_) => "DUPLICATE_LABEL",
            LumenError::AlreadyRegistered(_) => "ALREADY_REGISTERED",
            LumenError::BadRequest(_) => "BAD_REQUEST",
            LumenError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            LumenError::Io(_) => "IO",
            LumenError::Internal(_) => "INTERNAL",
        }
    }
}
