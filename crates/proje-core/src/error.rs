//! Client Errors
//!
//! Every failure the core can observe is folded into one of two enums.
//! Both render to a human-readable message through `Display`.

use thiserror::Error;

/// Result alias for HTTP client calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS...)
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status. `message` is the server's `error` field when it
    /// sent one, otherwise a generic status line.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// A 2xx response whose body was not the JSON we expected
    #[error("{0}")]
    MalformedBody(String),
}

impl ApiError {
    /// HTTP status, for backend-reported failures only
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of a user-triggered write (form submit, delete, account change)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Rejected before any request was made
    #[error("{0}")]
    Invalid(String),
    #[error("You need to log in first")]
    NotAuthenticated,
}
