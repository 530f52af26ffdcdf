//! Error Types
//!
//! Configuration and backend errors. UI code turns these into strings for
//! display; everything below the components propagates them with `?`.

use thiserror::Error;

/// Build-time configuration problems
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Errors talking to the hosted backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("not signed in")]
    NotSignedIn,
}

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
