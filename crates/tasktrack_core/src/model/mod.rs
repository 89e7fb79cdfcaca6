//! Task model consumed by search and reminder flows.
//!
//! # Responsibility
//! - Define the read-only task shape supplied by the surrounding application.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Core code reads tasks but never writes them back.

pub mod task;
