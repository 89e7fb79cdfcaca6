//! Task domain model.
//!
//! # Responsibility
//! - Define the read-only task record handed to core by the web layer.
//! - Validate identity and title bounds before a task enters search/reminder flows.
//!
//! # Invariants
//! - `id` is stable and unique per owner.
//! - `title` is non-blank and at most [`MAX_TITLE_CHARS`] characters.
//! - Core never mutates a task; it only reads `title` and `deadline`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Identifier of the user owning a task.
pub type OwnerId = Uuid;

/// Upper bound for task titles, counted in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 255;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    New,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// One task as supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Unix epoch milliseconds. `None` means the task has no deadline.
    #[serde(default)]
    pub deadline: Option<i64>,
    pub owner_id: OwnerId,
}

impl Task {
    /// Creates a task with default status/priority and no deadline.
    ///
    /// # Errors
    /// - Returns [`TaskValidationError`] when id or title violate model invariants.
    pub fn new(
        id: TaskId,
        owner_id: OwnerId,
        title: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            deadline: None,
            owner_id,
        };
        task.validate()?;
        Ok(task)
    }

    /// Builder-style deadline setter used by callers and tests.
    pub fn with_deadline(mut self, deadline_epoch_ms: i64) -> Self {
        self.deadline = Some(deadline_epoch_ms);
        self
    }

    /// Checks identity and title invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let chars = self.title.chars().count();
        if chars > MAX_TITLE_CHARS {
            return Err(TaskValidationError::TitleTooLong {
                chars,
                max: MAX_TITLE_CHARS,
            });
        }
        Ok(())
    }
}

/// Task model validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyTitle,
    TitleTooLong { chars: usize, max: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyTitle => write!(f, "task title must not be blank"),
            Self::TitleTooLong { chars, max } => {
                write!(f, "task title has {chars} characters; maximum is {max}")
            }
        }
    }
}

impl Error for TaskValidationError {}
