//! Ports - Interfaces the application layer depends on.
//!
//! Adapters in `crate::adapters` implement these traits.

mod state_storage;

pub use state_storage::{StateStorage, StateStorageError, StorageKey};
