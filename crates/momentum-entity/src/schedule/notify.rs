//! Schedule reminder lead-time enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far ahead of `start_at` the user is reminded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notify_minutes", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotifyMinutes {
    /// No reminder.
    None,
    /// 5 minutes before.
    Minutes5,
    /// 10 minutes before.
    Minutes10,
    /// 30 minutes before.
    Minutes30,
    /// 1 hour before.
    Hours1,
    /// 2 hours before.
    Hours2,
    /// 6 hours before.
    Hours6,
    /// 12 hours before.
    Hours12,
    /// 1 day before.
    Days1,
}

impl NotifyMinutes {
    /// The lead time in minutes, `None` when reminders are off.
    pub fn lead_minutes(&self) -> Option<i64> {
        match self {
            Self::None => None,
            Self::Minutes5 => Some(5),
            Self::Minutes10 => Some(10),
            Self::Minutes30 => Some(30),
            Self::Hours1 => Some(60),
            Self::Hours2 => Some(120),
            Self::Hours6 => Some(360),
            Self::Hours12 => Some(720),
            Self::Days1 => Some(1440),
        }
    }
}

impl fmt::Display for NotifyMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lead_minutes() {
            Some(m) => write!(f, "{m}m"),
            None => write!(f, "none"),
        }
    }
}
