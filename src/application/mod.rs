//! Application layer - Command handlers and session drivers.
//!
//! This layer orchestrates domain transitions and persistence through the
//! storage port. Handlers take a `CommandContext` whose `issued_at` is the
//! session's notion of "now".

pub mod handlers;
pub mod snapshot;
pub mod tick_driver;

pub use snapshot::{load_document, load_snapshot, save_snapshot};
pub use tick_driver::{TickDriver, TickDriverConfig, TickStop, Tickable};
