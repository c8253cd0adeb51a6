//! Error types for the socket broker

use std::path::PathBuf;

use thiserror::Error;

// ----------------------------------------------------------------------------
// Error Types
// ----------------------------------------------------------------------------

/// Errors raised by the socket broker.
///
/// Only startup can fail the broker as a whole; accept and per-session
/// failures are handled locally and never surface here.
#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("failed to bind socket at {path}: {source}")]
    Bind {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for broker operations
pub type Result<T> = std::result::Result<T, BrokerError>;
