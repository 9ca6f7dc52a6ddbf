//! JSON file storage for exported snapshots.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use model::SnapshotData;

use crate::error::{Result, StorageError};

/// Reads and writes one [`SnapshotData`] as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a storage backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot, or `None` if the file does not exist.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<SnapshotData>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("records file not found");
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };
        let data: SnapshotData = serde_json::from_str(&json)?;
        tracing::debug!(bytes = json.len(), "records file read");
        Ok(Some(data))
    }

    /// Writes the snapshot, creating parent directories as needed.
    #[tracing::instrument(skip(self, data), fields(path = %self.path.display()))]
    pub fn save(&self, data: &SnapshotData) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, format!("{json}\n")).map_err(|source| self.io_error(source))?;
        tracing::info!(bytes = json.len(), "records file written");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
