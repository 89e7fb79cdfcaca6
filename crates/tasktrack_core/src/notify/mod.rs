//! Deadline reminders.
//!
//! # Responsibility
//! - Select tasks whose deadline falls inside the reminder horizon.
//! - Decide per task whether a reminder may be shown again (cooldown).
//! - Shape near-deadline tasks for embedding into client pages.
//!
//! # Invariants
//! - Decision functions take "now" as input and never read the system clock.
//! - Tasks without a deadline are never reminded about.

use std::time::Duration;

pub mod cooldown;
pub mod deadline;
pub mod payload;

/// Converts a duration to whole milliseconds, saturating at `i64::MAX`.
pub(crate) fn duration_millis(value: Duration) -> i64 {
    i64::try_from(value.as_millis()).unwrap_or(i64::MAX)
}
