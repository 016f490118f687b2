//! Domain layer - pure state and transitions for Mindful.
//!
//! Nothing in here performs I/O. Callers load state through the storage
//! port, apply a transition, and save the result.

pub mod breathing;
pub mod foundation;
pub mod forum;
pub mod journal;
pub mod meditation;
pub mod mood;
pub mod pet;
pub mod privacy;
