//! Mindful - State core for a private, local-first wellness companion
//!
//! This crate holds the session state of the app as plain values: a
//! virtual pet that grows with daily care, guided breathing and meditation
//! timers, a journal, an anonymous community feed, and privacy settings.
//! Persisted entities are mirrored to a key-value JSON store through the
//! `ports::StateStorage` port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
