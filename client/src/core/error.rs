//! # Common Error Types
//!
//! Failure taxonomy for backend operations. Every variant carries the short
//! human-readable message the UI shows in its alert dialog, so callers can
//! display errors without further mapping.

use thiserror::Error;

/// Failure of a backend operation, classified by cause.
///
/// The gateway maps envelope error codes and transport conditions onto these
/// variants; see `services::api` for the mapping rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the request payload (envelope code `4000`).
    #[error("{0}")]
    Validation(String),

    /// The requested entity does not exist (envelope code `1004`).
    #[error("{0}")]
    NotFound(String),

    /// The session is not (or no longer) authenticated: envelope code `1001`,
    /// or a 401 that could not be recovered by a token refresh.
    #[error("{0}")]
    Authorization(String),

    /// No response was received (network unreachable or timed out).
    #[error("{0}")]
    Connectivity(String),

    /// Anything else: unexpected HTTP status, unparseable body, or the
    /// backend's catch-all error code `9999`.
    #[error("{0}")]
    Generic(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
