//! Core logic for tasktrack: fuzzy task search and deadline reminders.
//! The web layer hands tasks, queries and "now" in; nothing here owns task storage.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{
    ConfigError, ConfigResult, CoreConfig, LoggingConfig, ReminderConfig, SearchConfig,
    DEFAULT_SEARCH_MAX_DISTANCE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    OwnerId, Task, TaskId, TaskPriority, TaskStatus, TaskValidationError, MAX_TITLE_CHARS,
};
pub use notify::cooldown::{cooldown_state, CooldownState, DEFAULT_REMINDER_COOLDOWN};
pub use notify::deadline::{is_near_deadline, near_deadline, DEFAULT_NEAR_DEADLINE_HORIZON};
pub use notify::payload::{reminder_payloads_json, ReminderPayload};
pub use repo::cooldown_repo::{
    CooldownError, CooldownResult, CooldownStore, MemoryCooldownStore, SqliteCooldownStore,
};
pub use search::distance::{case_fold, edit_distance};
pub use search::rank::{rank, RankedMatch, Titled};
pub use service::reminder_service::ReminderService;
pub use service::search_service::{normalize_query, search_tasks};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
