//! Deadline reminder use-case service.
//!
//! # Responsibility
//! - Build the near-deadline list embedded into every page.
//! - Gate reminder display through the per-task cooldown store.
//!
//! # Invariants
//! - Decisions fail open: a store read error behaves like "never shown".
//! - `claim` decides and records in one store operation.
//! - "Now" is always supplied by the caller.

use crate::config::ReminderConfig;
use crate::model::task::{Task, TaskId};
use crate::notify::cooldown::{cooldown_state, CooldownState};
use crate::notify::deadline::near_deadline;
use crate::repo::cooldown_repo::{CooldownResult, CooldownStore};
use log::{debug, error};

/// Reminder service over an injected cooldown store.
pub struct ReminderService<S: CooldownStore> {
    store: S,
    config: ReminderConfig,
}

impl<S: CooldownStore> ReminderService<S> {
    pub fn new(store: S, config: ReminderConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tasks whose deadline lies within the configured horizon of `now`.
    pub fn near_deadline<'a>(&self, tasks: &'a [Task], now_epoch_ms: i64) -> Vec<&'a Task> {
        let near = near_deadline(tasks, now_epoch_ms, self.config.horizon());
        debug!(
            "event=near_deadline_scan module=service status=ok tasks={} near={}",
            tasks.len(),
            near.len()
        );
        near
    }

    /// Current cooldown state of one task.
    pub fn state(&self, task_id: TaskId, now_epoch_ms: i64) -> CooldownState {
        let last_shown = match self.store.last_shown(task_id) {
            Ok(value) => value,
            Err(err) => {
                error!(
                    "event=reminder_state module=service status=error task_id={task_id} error={err}"
                );
                None
            }
        };
        cooldown_state(last_shown, now_epoch_ms, self.config.cooldown())
    }

    /// Query: whether the reminder for `task_id` may be shown at `now`.
    ///
    /// Has no side effects; pair with [`Self::record_shown`], or use
    /// [`Self::claim`] to do both atomically.
    pub fn should_show(&self, task_id: TaskId, now_epoch_ms: i64) -> bool {
        self.state(task_id, now_epoch_ms).should_show()
    }

    /// Command: records that the reminder for `task_id` was shown at `now`.
    pub fn record_shown(&self, task_id: TaskId, now_epoch_ms: i64) -> CooldownResult<()> {
        self.store.record_shown(task_id, now_epoch_ms)
    }

    /// Decides and records in one step.
    ///
    /// Returns `true` at most once per cooldown window for a task.
    pub fn claim(&self, task_id: TaskId, now_epoch_ms: i64) -> bool {
        match self
            .store
            .try_claim(task_id, now_epoch_ms, self.config.cooldown())
        {
            Ok(granted) => {
                debug!(
                    "event=reminder_claim module=service status=ok task_id={task_id} granted={granted}"
                );
                granted
            }
            Err(err) => {
                error!(
                    "event=reminder_claim module=service status=error task_id={task_id} error={err}"
                );
                true
            }
        }
    }

    /// Near-deadline tasks whose reminder fires now; each returned task is
    /// recorded as shown.
    pub fn due_reminders<'a>(&self, tasks: &'a [Task], now_epoch_ms: i64) -> Vec<&'a Task> {
        self.near_deadline(tasks, now_epoch_ms)
            .into_iter()
            .filter(|task| self.claim(task.id, now_epoch_ms))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ReminderService;
    use crate::config::ReminderConfig;
    use crate::model::task::{Task, TaskId};
    use crate::repo::cooldown_repo::{CooldownError, CooldownResult, CooldownStore};
    use std::time::Duration;
    use uuid::Uuid;

    struct BrokenStore;

    impl CooldownStore for BrokenStore {
        fn last_shown(&self, _task_id: TaskId) -> CooldownResult<Option<i64>> {
            Err(CooldownError::InvalidSessionKey)
        }

        fn record_shown(&self, _task_id: TaskId, _at: i64) -> CooldownResult<()> {
            Err(CooldownError::InvalidSessionKey)
        }

        fn try_claim(
            &self,
            _task_id: TaskId,
            _now: i64,
            _cooldown: Duration,
        ) -> CooldownResult<bool> {
            Err(CooldownError::InvalidSessionKey)
        }
    }

    #[test]
    fn store_failures_fail_open() {
        let service = ReminderService::new(BrokenStore, ReminderConfig::default());
        let id = Uuid::new_v4();
        assert!(service.should_show(id, 0));
        assert!(service.claim(id, 0));
        assert!(service.record_shown(id, 0).is_err());
    }

    #[test]
    fn tasks_without_deadline_never_fire() {
        let service = ReminderService::new(
            crate::repo::cooldown_repo::MemoryCooldownStore::new(),
            ReminderConfig::default(),
        );
        let tasks = vec![Task::new(Uuid::new_v4(), Uuid::new_v4(), "undated").unwrap()];
        assert!(service.due_reminders(&tasks, 1_700_000_000_000).is_empty());
        assert!(service.store().is_empty());
    }
}
