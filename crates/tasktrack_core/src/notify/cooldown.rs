//! Per-task reminder cooldown state machine.
//!
//! # Responsibility
//! - Classify a task's reminder state from its last-shown timestamp.
//!
//! # Invariants
//! - State is derived lazily from `(last_shown, now, cooldown)`; nothing ticks.
//! - Missing or negative last-shown values mean the reminder was never shown.
//! - A last-shown value later than `now` counts as shown recently.
//! - Exactly `cooldown` after the last display the reminder is still recent;
//!   it turns stale one millisecond later.

use crate::notify::duration_millis;
use std::time::Duration;

/// Default minimum gap between two displays of the same reminder.
pub const DEFAULT_REMINDER_COOLDOWN: Duration = Duration::from_secs(60 * 60);

/// Reminder display state for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    NeverShown,
    ShownRecently,
    ShownStale,
}

impl CooldownState {
    /// Whether a reminder may be displayed in this state.
    pub fn should_show(self) -> bool {
        matches!(self, Self::NeverShown | Self::ShownStale)
    }
}

/// Derives the cooldown state of one task.
pub fn cooldown_state(
    last_shown_epoch_ms: Option<i64>,
    now_epoch_ms: i64,
    cooldown: Duration,
) -> CooldownState {
    let Some(last_shown) = last_shown_epoch_ms.filter(|value| *value >= 0) else {
        return CooldownState::NeverShown;
    };

    let elapsed = i128::from(now_epoch_ms) - i128::from(last_shown);
    if elapsed > i128::from(duration_millis(cooldown)) {
        CooldownState::ShownStale
    } else {
        CooldownState::ShownRecently
    }
}
