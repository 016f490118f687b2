//! Snapshot helpers shared by the command handlers.
//!
//! Reads never fail: an unreadable or malformed document is logged and
//! treated as absent, so the caller falls back to defaults. Writes log and
//! return their error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::ports::{StateStorage, StateStorageError, StorageKey};

/// Loads the raw document under `key`, or `None` if it is absent or unreadable.
pub async fn load_document(storage: &dyn StateStorage, key: StorageKey) -> Option<Value> {
    match storage.load(key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(key = %key, error = %e, "Unreadable snapshot, treating as absent");
            None
        }
    }
}

/// Loads and decodes the document under `key`.
pub async fn load_snapshot<T: DeserializeOwned>(
    storage: &dyn StateStorage,
    key: StorageKey,
) -> Option<T> {
    let value = load_document(storage, key).await?;
    match serde_json::from_value(value) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(key = %key, error = %e, "Malformed snapshot, treating as absent");
            None
        }
    }
}

/// Encodes `snapshot` and saves it under `key`.
pub async fn save_snapshot<T: Serialize + ?Sized>(
    storage: &dyn StateStorage,
    key: StorageKey,
    snapshot: &T,
) -> Result<(), StateStorageError> {
    let result = match serde_json::to_value(snapshot) {
        Ok(value) => storage.save(key, &value).await,
        Err(e) => Err(StateStorageError::SerializationFailed {
            key,
            reason: e.to_string(),
        }),
    };

    if let Err(e) = &result {
        error!(key = %key, error = %e, "Failed to persist snapshot");
    }
    result
}
