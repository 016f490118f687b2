//! Adapters - Implementations of the ports.

pub mod storage;

pub use storage::{FileStateStorage, InMemoryStateStorage};
