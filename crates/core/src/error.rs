//! Error types for the release pipeline
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Two variants never reach a caller: `MirrorWrite` and `Notify` are
//! produced by post-commit side effects, logged, and swallowed. The
//! mirror is a best-effort denormalization; a stale mirror repairs on
//! the next successful write.

use crate::types::ReleaseId;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the release pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing required fields; reported before any write
    #[error("validation failed: {0}")]
    Validation(String),

    /// Target release does not exist; no write performed
    #[error("release not found: {0}")]
    NotFound(ReleaseId),

    /// Primary-store write failed; the call fails
    #[error("record store write failed: {0}")]
    StoreWrite(String),

    /// Mirror write failed after the primary succeeded; logged only
    #[error("mirror store write failed: {0}")]
    MirrorWrite(String),

    /// Notification emission failed; logged only
    #[error("notification write failed: {0}")]
    Notify(String),

    /// Stats query failed
    #[error("stats query failed: {0}")]
    Query(String),
}

impl Error {
    /// Machine-readable kind for structured error reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::NotFound(_) => "not-found",
            Error::StoreWrite(_) => "store-write",
            Error::MirrorWrite(_) => "mirror-write",
            Error::Notify(_) => "notify",
            Error::Query(_) => "query",
        }
    }
}
