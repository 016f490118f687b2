//! File-based State Storage Adapter
//!
//! Stores each key as a pretty-printed `<key>.json` file under a data
//! directory. Saves go through `<key>.json.tmp` and a rename.

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{StateStorage, StateStorageError, StorageKey};

/// File-based storage for session state
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
}

impl FileStateStorage {
    /// Create a new file storage with a base directory
    ///
    /// The directory is created on first save.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, key: StorageKey) -> PathBuf {
        self.base_path.join(key.file_name())
    }

    fn tmp_path(&self, key: StorageKey) -> PathBuf {
        self.base_path.join(format!("{}.tmp", key.file_name()))
    }

    async fn ensure_dir(&self) -> Result<(), StateStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn load(&self, key: StorageKey) -> Result<Option<Value>, StateStorageError> {
        let file_path = self.file_path(key);

        let json = match fs::read_to_string(&file_path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StateStorageError::IoError(e.to_string())),
        };

        let value = serde_json::from_str(&json).map_err(|e| {
            StateStorageError::DeserializationFailed {
                key,
                reason: e.to_string(),
            }
        })?;

        Ok(Some(value))
    }

    async fn save(&self, key: StorageKey, value: &Value) -> Result<(), StateStorageError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(value).map_err(|e| {
            StateStorageError::SerializationFailed {
                key,
                reason: e.to_string(),
            }
        })?;

        // A torn write only ever damages the temp file.
        let tmp_path = self.tmp_path(key);
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, self.file_path(key))
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StateStorageError> {
        match fs::remove_file(self.file_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StateStorageError::IoError(e.to_string())),
        }
    }

    async fn exists(&self, key: StorageKey) -> Result<bool, StateStorageError> {
        Ok(self.file_path(key).exists())
    }
}
