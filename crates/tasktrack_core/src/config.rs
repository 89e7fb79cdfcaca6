//! Core configuration.
//!
//! # Responsibility
//! - Describe the tunable search, reminder and logging parameters.
//! - Load them from JSON with per-field defaults and validate them.
//!
//! # Invariants
//! - Horizon and cooldown are durations, never raw constants in call sites.
//! - A loaded config has passed [`CoreConfig::validate`].

use crate::logging::default_log_level;
use crate::notify::cooldown::DEFAULT_REMINDER_COOLDOWN;
use crate::notify::deadline::DEFAULT_NEAR_DEADLINE_HORIZON;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default maximum edit distance for a title to count as a search hit.
pub const DEFAULT_SEARCH_MAX_DISTANCE: usize = 5;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration load/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Fuzzy search tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Titles farther than this from the query are dropped; `None` keeps all.
    pub max_distance: Option<usize>,
    /// Maximum number of hits; `None` means unlimited.
    pub limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_distance: Some(DEFAULT_SEARCH_MAX_DISTANCE),
            limit: None,
        }
    }
}

/// Deadline reminder tuning, stored as milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReminderConfig {
    pub horizon_ms: u64,
    pub cooldown_ms: u64,
}

impl ReminderConfig {
    /// Builds a validated config.
    ///
    /// # Errors
    /// - `Invalid` when either duration is shorter than one millisecond.
    pub fn new(horizon: Duration, cooldown: Duration) -> ConfigResult<Self> {
        let config = Self {
            horizon_ms: whole_millis(horizon),
            cooldown_ms: whole_millis(cooldown),
        };
        config.validate()?;
        Ok(config)
    }

    /// Forward window in which a deadline triggers a reminder.
    pub fn horizon(&self) -> Duration {
        Duration::from_millis(self.horizon_ms)
    }

    /// Minimum gap between two displays of one reminder.
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.horizon_ms == 0 {
            return Err(ConfigError::Invalid("reminders.horizon_ms must be > 0"));
        }
        if self.cooldown_ms == 0 {
            return Err(ConfigError::Invalid("reminders.cooldown_ms must be > 0"));
        }
        Ok(())
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            horizon_ms: whole_millis(DEFAULT_NEAR_DEADLINE_HORIZON),
            cooldown_ms: whole_millis(DEFAULT_REMINDER_COOLDOWN),
        }
    }
}

fn whole_millis(value: Duration) -> u64 {
    u64::try_from(value.as_millis()).unwrap_or(u64::MAX)
}

/// Log backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub search: SearchConfig,
    pub reminders: ReminderConfig,
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Parses and validates a JSON document. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(
            "event=config_load module=config status=ok horizon_ms={} cooldown_ms={}",
            config.reminders.horizon_ms, config.reminders.cooldown_ms
        );
        Ok(config)
    }

    /// Rejects values that would disable a feature by accident.
    pub fn validate(&self) -> ConfigResult<()> {
        self.reminders.validate()?;
        if self.search.limit == Some(0) {
            return Err(ConfigError::Invalid("search.limit must be > 0 when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ReminderConfig, DEFAULT_SEARCH_MAX_DISTANCE};
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.reminders.horizon(), Duration::from_secs(86_400));
        assert_eq!(config.reminders.cooldown(), Duration::from_secs(3_600));
        assert_eq!(config.search.max_distance, Some(DEFAULT_SEARCH_MAX_DISTANCE));
        assert_eq!(config.search.limit, None);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config =
            CoreConfig::from_json_str(r#"{"reminders": {"cooldown_ms": 600000}}"#).unwrap();
        assert_eq!(config.reminders.cooldown(), Duration::from_secs(600));
        assert_eq!(config.reminders.horizon(), Duration::from_secs(86_400));
    }

    #[test]
    fn null_max_distance_disables_threshold() {
        let config = CoreConfig::from_json_str(r#"{"search": {"max_distance": null}}"#).unwrap();
        assert_eq!(config.search.max_distance, None);
    }

    #[test]
    fn zero_durations_are_rejected() {
        let err = CoreConfig::from_json_str(r#"{"reminders": {"cooldown_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(message) if message.contains("cooldown")));

        let err = CoreConfig::from_json_str(r#"{"reminders": {"horizon_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(message) if message.contains("horizon")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CoreConfig::from_json_str(r#"{"search": {"treshold": 3}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn sub_second_durations_round_trip() {
        let horizon = Duration::from_millis(90_250);
        let cooldown = Duration::from_millis(1_500);
        let config = ReminderConfig::new(horizon, cooldown).unwrap();
        assert_eq!(config.horizon(), horizon);
        assert_eq!(config.cooldown(), cooldown);

        let config = ReminderConfig::new(horizon, Duration::from_millis(500)).unwrap();
        assert_eq!(config.cooldown(), Duration::from_millis(500));
    }

    #[test]
    fn new_rejects_durations_below_one_millisecond() {
        let day = Duration::from_secs(86_400);
        let err = ReminderConfig::new(day, Duration::ZERO).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(message) if message.contains("cooldown")));

        let err = ReminderConfig::new(day, Duration::from_micros(500)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(message) if message.contains("cooldown")));

        let err = ReminderConfig::new(Duration::ZERO, day).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(message) if message.contains("horizon")));
    }
}
