//! Reminder cooldown stores.
//!
//! # Responsibility
//! - Persist the last-shown timestamp per task for one client session.
//! - Offer an atomic claim that decides and records in one step.
//!
//! # Invariants
//! - Records are keyed by task id only within one store/session; there is no
//!   global cooldown across tasks.
//! - Unreadable stored values surface as `None` (never shown), not as errors.
//! - `try_claim` never returns `true` twice for one task inside one cooldown
//!   window, including under concurrent callers sharing the store.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::task::TaskId;
use crate::notify::cooldown::cooldown_state;
use crate::notify::duration_millis;
use log::warn;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

pub type CooldownResult<T> = Result<T, CooldownError>;

/// Cooldown store failures.
#[derive(Debug)]
pub enum CooldownError {
    Db(DbError),
    /// Session key is blank.
    InvalidSessionKey,
    /// Connection was not migrated before the store was built.
    SchemaNotReady { db_version: u32, expected: u32 },
}

impl Display for CooldownError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidSessionKey => write!(f, "cooldown session key must not be blank"),
            Self::SchemaNotReady {
                db_version,
                expected,
            } => write!(
                f,
                "cooldown store schema version {db_version} does not match expected {expected}"
            ),
        }
    }
}

impl Error for CooldownError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidSessionKey | Self::SchemaNotReady { .. } => None,
        }
    }
}

impl From<DbError> for CooldownError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for CooldownError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value store of last-shown timestamps (epoch milliseconds) by task.
pub trait CooldownStore {
    /// Returns the last-shown timestamp, or `None` when absent or unreadable.
    fn last_shown(&self, task_id: TaskId) -> CooldownResult<Option<i64>>;

    /// Overwrites the last-shown timestamp.
    fn record_shown(&self, task_id: TaskId, shown_at_epoch_ms: i64) -> CooldownResult<()>;

    /// Records `now_epoch_ms` and returns `true` iff the reminder may be shown
    /// now; returns `false` without writing otherwise.
    fn try_claim(
        &self,
        task_id: TaskId,
        now_epoch_ms: i64,
        cooldown: Duration,
    ) -> CooldownResult<bool>;
}

impl<S: CooldownStore + ?Sized> CooldownStore for &S {
    fn last_shown(&self, task_id: TaskId) -> CooldownResult<Option<i64>> {
        (**self).last_shown(task_id)
    }

    fn record_shown(&self, task_id: TaskId, shown_at_epoch_ms: i64) -> CooldownResult<()> {
        (**self).record_shown(task_id, shown_at_epoch_ms)
    }

    fn try_claim(
        &self,
        task_id: TaskId,
        now_epoch_ms: i64,
        cooldown: Duration,
    ) -> CooldownResult<bool> {
        (**self).try_claim(task_id, now_epoch_ms, cooldown)
    }
}

/// Process-local store for one client session.
#[derive(Debug, Default)]
pub struct MemoryCooldownStore {
    records: Mutex<HashMap<TaskId, i64>>,
}

impl MemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks with a recorded display.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CooldownStore for MemoryCooldownStore {
    fn last_shown(&self, task_id: TaskId) -> CooldownResult<Option<i64>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&task_id).copied())
    }

    fn record_shown(&self, task_id: TaskId, shown_at_epoch_ms: i64) -> CooldownResult<()> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(task_id, shown_at_epoch_ms);
        Ok(())
    }

    fn try_claim(
        &self,
        task_id: TaskId,
        now_epoch_ms: i64,
        cooldown: Duration,
    ) -> CooldownResult<bool> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let state = cooldown_state(records.get(&task_id).copied(), now_epoch_ms, cooldown);
        if !state.should_show() {
            return Ok(false);
        }
        records.insert(task_id, now_epoch_ms);
        Ok(true)
    }
}

/// SQLite-backed store scoped to one session key.
pub struct SqliteCooldownStore<'conn> {
    conn: &'conn Connection,
    session_key: String,
}

impl<'conn> SqliteCooldownStore<'conn> {
    /// Builds a store over a migrated connection.
    ///
    /// # Errors
    /// - `InvalidSessionKey` when `session_key` is blank.
    /// - `SchemaNotReady` when the connection was not opened through
    ///   [`crate::db::open_db`] / [`crate::db::open_db_in_memory`].
    pub fn try_new(
        conn: &'conn Connection,
        session_key: impl Into<String>,
    ) -> CooldownResult<Self> {
        let session_key: String = session_key.into();
        let session_key = session_key.trim().to_string();
        if session_key.is_empty() {
            return Err(CooldownError::InvalidSessionKey);
        }

        let db_version = current_user_version(conn)?;
        let expected = latest_version();
        if db_version != expected {
            return Err(CooldownError::SchemaNotReady {
                db_version,
                expected,
            });
        }

        Ok(Self { conn, session_key })
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }
}

impl CooldownStore for SqliteCooldownStore<'_> {
    fn last_shown(&self, task_id: TaskId) -> CooldownResult<Option<i64>> {
        let stored = self
            .conn
            .query_row(
                "SELECT last_shown_ms
                 FROM reminder_cooldowns
                 WHERE session_key = ?1 AND task_id = ?2;",
                params![self.session_key, task_id.to_string()],
                |row| row.get::<_, Value>(0),
            )
            .optional()?;

        Ok(match stored {
            None => None,
            Some(Value::Integer(value)) if value >= 0 => Some(value),
            Some(other) => {
                warn!(
                    "event=cooldown_record_corrupt module=repo status=ignored task_id={} kind={}",
                    task_id,
                    value_kind(&other)
                );
                None
            }
        })
    }

    fn record_shown(&self, task_id: TaskId, shown_at_epoch_ms: i64) -> CooldownResult<()> {
        self.conn.execute(
            "INSERT INTO reminder_cooldowns (session_key, task_id, last_shown_ms)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (session_key, task_id)
             DO UPDATE SET last_shown_ms = excluded.last_shown_ms;",
            params![self.session_key, task_id.to_string(), shown_at_epoch_ms],
        )?;
        Ok(())
    }

    fn try_claim(
        &self,
        task_id: TaskId,
        now_epoch_ms: i64,
        cooldown: Duration,
    ) -> CooldownResult<bool> {
        // Single statement: the conditional upsert is the compare-and-swap.
        let changed = self.conn.execute(
            "INSERT INTO reminder_cooldowns (session_key, task_id, last_shown_ms)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (session_key, task_id)
             DO UPDATE SET last_shown_ms = excluded.last_shown_ms
             WHERE typeof(reminder_cooldowns.last_shown_ms) != 'integer'
                OR reminder_cooldowns.last_shown_ms < 0
                OR ?3 - reminder_cooldowns.last_shown_ms > ?4;",
            params![
                self.session_key,
                task_id.to_string(),
                now_epoch_ms,
                duration_millis(cooldown),
            ],
        )?;
        Ok(changed == 1)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Integer(_) => "negative_integer",
        Value::Real(_) => "real",
        Value::Text(_) => "text",
        Value::Blob(_) => "blob",
    }
}
