//! Serialized shape of near-deadline tasks embedded into client pages.

use crate::model::task::{OwnerId, Task, TaskId, TaskPriority, TaskStatus};
use serde::Serialize;

/// Client-facing view of one near-deadline task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderPayload<'a> {
    pub id: TaskId,
    pub title: &'a str,
    pub description: &'a str,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Unix epoch milliseconds.
    pub deadline: Option<i64>,
    pub owner_id: OwnerId,
    /// Milliseconds left until the deadline at render time; `None` without deadline.
    pub remaining_ms: Option<i64>,
}

impl<'a> ReminderPayload<'a> {
    pub fn from_task(task: &'a Task, now_epoch_ms: i64) -> Self {
        Self {
            id: task.id,
            title: &task.title,
            description: &task.description,
            status: task.status,
            priority: task.priority,
            deadline: task.deadline,
            owner_id: task.owner_id,
            remaining_ms: task
                .deadline
                .map(|deadline| deadline.saturating_sub(now_epoch_ms)),
        }
    }
}

/// Renders near-deadline tasks as a JSON array for page embedding.
pub fn reminder_payloads_json(
    tasks: &[&Task],
    now_epoch_ms: i64,
) -> Result<String, serde_json::Error> {
    let payloads = tasks
        .iter()
        .map(|task| ReminderPayload::from_task(task, now_epoch_ms))
        .collect::<Vec<_>>();
    serde_json::to_string(&payloads)
}
