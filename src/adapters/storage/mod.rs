//! Storage Adapters
//!
//! Implementations of the StateStorage port.
//!
//! ## Available Adapters
//!
//! - **FileStateStorage** - One JSON file per key on disk
//! - **InMemoryStateStorage** - Shared in-memory map (testing/ephemeral sessions)
//!
//! ## Usage
//!
//! ```ignore
//! use mindful::adapters::storage::{FileStateStorage, InMemoryStateStorage};
//!
//! let storage = FileStateStorage::new("./data");
//! let storage = InMemoryStateStorage::new();
//! ```

mod file_state_storage;
mod in_memory_state_storage;

pub use file_state_storage::FileStateStorage;
pub use in_memory_state_storage::InMemoryStateStorage;
