//! Error types shared across the engine
//!
//! Nothing here is fatal to a player: storage failures are logged and every
//! restore failure degrades to a fresh session for today.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure talking to the persistence gateway
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Why a persisted value was discarded instead of restored
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("Corrupt value under '{key}': {source}")]
    Corrupt {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("Snapshot from {stored} is stale (today is {today})")]
    Stale { stored: NaiveDate, today: NaiveDate },

    #[error("Stored version '{found}' does not match '{expected}'")]
    VersionMismatch { found: String, expected: String },

    #[error("Board snapshot has the wrong shape: {0}")]
    Shape(String),
}

/// Failure to start a session at all
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Dictionary has no secret candidates")]
    EmptyDictionary,
}
