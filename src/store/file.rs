//! JSON file store
//!
//! All keys live in one JSON object on disk. Every write rewrites the file
//! through a temporary sibling and a rename so a crash never leaves a
//! half-written state file behind.

use super::Storage;
use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File name used inside the data directory
pub const STATE_FILE: &str = "state.json";

/// Durable key-value store backed by a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the state file in `dir`
    ///
    /// A state file that cannot be parsed is treated as empty; it is
    /// replaced on the next write.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created or the
    /// existing file cannot be read.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(STATE_FILE);

        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                log::warn!("State file {} is corrupt ({err}); starting fresh", path.display());
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        log::debug!("Opened state file {} with {} keys", path.display(), values.len());
        Ok(Self { path, values })
    }

    /// Location of the state file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        write_atomic(&self.path, &content)?;
        Ok(())
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(STATE_FILE);
    let tmp_path = dir.join(format!(".{base}.tmp-{}", std::process::id()));

    let mut tmp = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)?;
    tmp.write_all(content.as_bytes())?;
    tmp.sync_all()?;
    drop(tmp);

    fs::rename(&tmp_path, path)
}
