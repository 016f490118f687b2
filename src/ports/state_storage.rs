//! State Storage Port - Interface for persisting session state.
//!
//! The store is a flat key-value map of JSON documents, one per persisted
//! entity. Adapters decide where the documents live.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Keys under which entities are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    VirtualPet,
    JournalEntries,
    CommunityPosts,
    PrivacySettings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::VirtualPet,
        StorageKey::JournalEntries,
        StorageKey::CommunityPosts,
        StorageKey::PrivacySettings,
    ];

    /// The wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::VirtualPet => "virtualPet",
            StorageKey::JournalEntries => "journalEntries",
            StorageKey::CommunityPosts => "communityPosts",
            StorageKey::PrivacySettings => "privacySettings",
        }
    }

    /// File name used by file-backed adapters.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during state storage operations
#[derive(Debug, thiserror::Error)]
pub enum StateStorageError {
    #[error("Failed to serialize state for {key}: {reason}")]
    SerializationFailed { key: StorageKey, reason: String },

    #[error("Failed to deserialize state for {key}: {reason}")]
    DeserializationFailed { key: StorageKey, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StateStorageError> for DomainError {
    fn from(err: StateStorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting and loading JSON documents by key
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Load the document stored under `key`.
    ///
    /// # Returns
    /// `None` if nothing has been saved under the key.
    ///
    /// # Errors
    /// `DeserializationFailed` if the stored bytes are not JSON, `IoError`
    /// if the backing store cannot be read.
    async fn load(&self, key: StorageKey) -> Result<Option<Value>, StateStorageError>;

    /// Save `value` under `key`, replacing any previous document.
    async fn save(&self, key: StorageKey, value: &Value) -> Result<(), StateStorageError>;

    /// Remove the document under `key`. Removing an absent key is not an error.
    async fn remove(&self, key: StorageKey) -> Result<(), StateStorageError>;

    /// Check if a document exists under `key`
    async fn exists(&self, key: StorageKey) -> Result<bool, StateStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_use_stored_names() {
        let names: Vec<_> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec!["virtualPet", "journalEntries", "communityPosts", "privacySettings"]
        );
    }

    #[test]
    fn file_name_appends_json_extension() {
        assert_eq!(StorageKey::VirtualPet.file_name(), "virtualPet.json");
    }

    #[test]
    fn deserialization_error_names_key() {
        let err = StateStorageError::DeserializationFailed {
            key: StorageKey::CommunityPosts,
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("communityPosts"));
    }

    #[test]
    fn converts_to_storage_domain_error() {
        let err: DomainError = StateStorageError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }
}
