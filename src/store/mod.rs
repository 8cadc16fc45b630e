//! Persistence gateway
//!
//! The engine never touches durable storage directly. Everything goes through
//! the narrow string key-value [`Storage`] contract, so a browser-style local
//! store, a JSON file, or an in-memory fake are interchangeable.

mod file;
mod memory;
mod records;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{BoardSnapshot, CellRecord, DailyWordRecord, RowRecord};

use crate::error::{RestoreError, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Keys written by the engine
pub mod keys {
    /// `{date, word}` for the current day
    pub const DAILY_WORD: &str = "daily_word";
    /// Grid snapshot, written after every accepted guess
    pub const BOARD_STATE: &str = "board_state";
    /// Day of the last completed game
    pub const LAST_PLAYED: &str = "last_played";
    /// Running statistics
    pub const GAME_STATS: &str = "game_stats";
    /// First-time help gate
    pub const HAS_SEEN_HELP: &str = "has_seen_help";
    /// Schema marker; a mismatch wipes day-scoped state
    pub const GAME_VERSION: &str = "game_version";

    /// Day-scoped keys cleared by a version bump; `LAST_PLAYED` stays so a
    /// finished day remains finished
    pub const DAY_SCOPED: [&str; 2] = [DAILY_WORD, BOARD_STATE];
}

/// Version marker of the persisted layout understood by this build
pub const GAME_VERSION: &str = "1";

/// String key-value store scoped to one installation
pub trait Storage {
    /// Read a raw value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value
    ///
    /// # Errors
    /// Returns `StoreError` if the value cannot be made durable.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete a value; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns `StoreError` if the change cannot be made durable.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Read and decode a JSON value
///
/// A missing key is `Ok(None)`; a value that fails to parse is reported as
/// [`RestoreError::Corrupt`] so the caller can discard it.
///
/// # Errors
/// Returns `RestoreError::Corrupt` when the stored text is not valid for `T`.
pub fn read_json<T: DeserializeOwned>(
    store: &impl Storage,
    key: &'static str,
) -> Result<Option<T>, RestoreError> {
    store
        .get(key)
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(|source| RestoreError::Corrupt { key, source })
}

/// Read a JSON value, treating corrupt data as absent
pub fn read_json_or_discard<T: DeserializeOwned>(store: &impl Storage, key: &'static str) -> Option<T> {
    match read_json(store, key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{err}; discarding");
            None
        }
    }
}

/// Encode and write a JSON value
///
/// # Errors
/// Returns `StoreError` if encoding or the underlying write fails.
pub fn write_json<T: Serialize + ?Sized>(
    store: &mut impl Storage,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(value)?;
    store.set(key, encoded)
}

/// Compare the stored layout version with this build's
///
/// On mismatch, or when no version was ever written, the day-scoped keys are
/// wiped (stats, the last played day and the help flag survive) and the
/// current version recorded.
///
/// # Errors
/// Returns `StoreError` if the wipe or the version write fails.
pub fn ensure_version(store: &mut impl Storage, expected: &str) -> Result<bool, StoreError> {
    let found: Option<String> = read_json_or_discard(&*store, keys::GAME_VERSION);
    if found.as_deref() == Some(expected) {
        return Ok(false);
    }

    if let Some(found) = found {
        let err = RestoreError::VersionMismatch {
            found,
            expected: expected.to_string(),
        };
        log::info!("{err}; wiping day-scoped state");
    }
    for key in keys::DAY_SCOPED {
        store.remove(key)?;
    }
    write_json(store, keys::GAME_VERSION, expected)?;
    Ok(true)
}

/// Whether the first-time help has been dismissed
#[must_use]
pub fn has_seen_help(store: &impl Storage) -> bool {
    read_json_or_discard(store, keys::HAS_SEEN_HELP).unwrap_or(false)
}

/// Remember that the help has been dismissed
///
/// # Errors
/// Returns `StoreError` if the flag cannot be written.
pub fn mark_help_seen(store: &mut impl Storage) -> Result<(), StoreError> {
    write_json(store, keys::HAS_SEEN_HELP, &true)
}
