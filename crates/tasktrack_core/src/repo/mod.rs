//! Reminder state persistence.
//!
//! # Responsibility
//! - Define the cooldown store contract used by reminder services.
//! - Provide in-memory and SQLite implementations.
//!
//! # Invariants
//! - Store reads fail open: unreadable records look like "never shown".
//! - SQL details stay inside this layer.

pub mod cooldown_repo;
