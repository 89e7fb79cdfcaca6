//! Near-deadline selection.
//!
//! # Invariants
//! - A task is near its deadline iff `0 <= deadline - now <= horizon`.
//! - Overdue tasks are not near; they belong to a separate overdue view.
//! - Selection preserves input order.

use crate::model::task::Task;
use crate::notify::duration_millis;
use std::time::Duration;

/// Default forward window for deadline reminders.
pub const DEFAULT_NEAR_DEADLINE_HORIZON: Duration = Duration::from_secs(24 * 60 * 60);

/// Returns whether `deadline` falls inside `[now, now + horizon]`.
///
/// Missing deadlines are never near.
pub fn is_near_deadline(deadline: Option<i64>, now_epoch_ms: i64, horizon: Duration) -> bool {
    let Some(deadline) = deadline else {
        return false;
    };
    let remaining = i128::from(deadline) - i128::from(now_epoch_ms);
    remaining >= 0 && remaining <= i128::from(duration_millis(horizon))
}

/// Filters `tasks` down to those due within `horizon` of `now_epoch_ms`.
pub fn near_deadline(tasks: &[Task], now_epoch_ms: i64, horizon: Duration) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| is_near_deadline(task.deadline, now_epoch_ms, horizon))
        .collect()
}
