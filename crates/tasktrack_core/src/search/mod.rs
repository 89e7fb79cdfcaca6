//! Fuzzy title search.
//!
//! # Responsibility
//! - Compute Levenshtein distances between queries and task titles.
//! - Rank candidates by similarity without touching storage.
//!
//! # Invariants
//! - Search is pure and holds no shared state; concurrent calls are safe.

pub mod distance;
pub mod rank;
