//! In-Memory State Storage Adapter
//!
//! Keeps documents in a shared map. Useful for testing and for sessions
//! that should leave nothing on disk.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{StateStorage, StateStorageError, StorageKey};

/// In-memory storage for session state
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    documents: Arc<RwLock<HashMap<StorageKey, Value>>>,
}

impl InMemoryStateStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with documents
    pub fn with_documents(documents: impl IntoIterator<Item = (StorageKey, Value)>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents.into_iter().collect())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    /// Get the number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn load(&self, key: StorageKey) -> Result<Option<Value>, StateStorageError> {
        Ok(self.documents.read().await.get(&key).cloned())
    }

    async fn save(&self, key: StorageKey, value: &Value) -> Result<(), StateStorageError> {
        self.documents.write().await.insert(key, value.clone());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StateStorageError> {
        self.documents.write().await.remove(&key);
        Ok(())
    }

    async fn exists(&self, key: StorageKey) -> Result<bool, StateStorageError> {
        Ok(self.documents.read().await.contains_key(&key))
    }
}
