//! Command infrastructure for application handlers.
//!
//! Every handler receives a `CommandContext` alongside its command. The
//! context fixes the instant the command was issued, so transitions that
//! depend on "now" (care cadence, decay, journal dates) are driven by the
//! caller rather than read from the wall clock mid-handler.
//!
//! # Example
//!
//! ```ignore
//! let ctx = CommandContext::now().with_source("ui");
//! let result = care_handler.handle(CareForPetCommand, ctx).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandContext {
    /// When the command was issued. Handlers treat this as "now".
    pub issued_at: Timestamp,

    /// Source of this command (e.g., "ui", "session-host", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandContext {
    /// Creates a context issued at the given instant.
    pub fn at(issued_at: Timestamp) -> Self {
        Self {
            issued_at,
            source: None,
        }
    }

    /// Creates a context issued at the current moment.
    pub fn now() -> Self {
        Self::at(Timestamp::now())
    }

    /// Sets the command source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the command source, if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::now()
    }
}
