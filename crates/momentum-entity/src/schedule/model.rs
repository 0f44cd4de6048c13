//! Schedule entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::ScheduleCategory;
use super::notify::NotifyMinutes;
use super::status::ScheduleStatus;

/// A calendar entry owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    /// Unique schedule identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Entry title.
    pub title: String,
    /// Planned start.
    pub start_at: DateTime<Utc>,
    /// Planned end.
    pub end_at: DateTime<Utc>,
    /// Reminder lead time.
    pub notify_minutes: NotifyMinutes,
    /// Entry category.
    pub category: ScheduleCategory,
    /// Lifecycle status.
    pub status: ScheduleStatus,
    /// Free-form note.
    pub memo: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Planned duration in whole minutes.
    pub fn planned_minutes(&self) -> i64 {
        (self.end_at - self.start_at).num_minutes()
    }
}

/// Data required to create a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSchedule {
    /// Entry title.
    pub title: String,
    /// Planned start.
    pub start_at: DateTime<Utc>,
    /// Planned end.
    pub end_at: DateTime<Utc>,
    /// Reminder lead time.
    pub notify_minutes: NotifyMinutes,
    /// Entry category.
    pub category: ScheduleCategory,
    /// Free-form note.
    pub memo: Option<String>,
}

/// Full-replace update payload for a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSchedule {
    /// Entry title.
    pub title: String,
    /// Planned start.
    pub start_at: DateTime<Utc>,
    /// Planned end.
    pub end_at: DateTime<Utc>,
    /// Reminder lead time.
    pub notify_minutes: NotifyMinutes,
    /// Entry category.
    pub category: ScheduleCategory,
    /// Free-form note.
    pub memo: Option<String>,
}
