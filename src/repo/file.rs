//! JSON data file backing a [`Store`](super::Store).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use super::data::StoreData;
use crate::error::ErrorKind;

/// Errors reading or writing the data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access data file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file '{path}': {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store data: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<StoreError> for ErrorKind {
    fn from(err: StoreError) -> Self {
        ErrorKind::Storage(err.to_string())
    }
}

/// Location of the data file plus the lock and temp files next to it.
///
/// Readers take a shared lock and writers an exclusive one, so several
/// processes can share a file. Writes go to a temp file that is then
/// renamed over the data file.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file. A missing or empty file is an empty store.
    pub fn load(&self) -> Result<StoreData, StoreError> {
        if !self.path.exists() {
            return Ok(StoreData::default());
        }

        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock).map_err(|e| io_error(&self.path, e))?;

        let content = fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
        let _ = FileExt::unlock(&lock);

        if content.trim().is_empty() {
            return Ok(StoreData::default());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Deserialize {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file contents with `data`.
    pub fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            }
        }

        let json = serde_json::to_vec_pretty(data).map_err(StoreError::Serialize)?;

        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock).map_err(|e| io_error(&self.path, e))?;

        let tmp = self.sibling("tmp");
        fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        let renamed = fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e));
        let _ = FileExt::unlock(&lock);
        renamed?;

        tracing::debug!(path = %self.path.display(), "store data written");
        Ok(())
    }

    fn open_lock(&self) -> Result<File, StoreError> {
        let lock_path = self.sibling("lock");
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| io_error(&lock_path, e))
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
