//! Daily summary entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Aggregated statistics for one user on one calendar day.
///
/// All durations are whole minutes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailySummary {
    /// Unique summary identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// The day being summarized.
    pub date: NaiveDate,
    /// Total completed deep work minutes.
    pub total_deepwork_time: i32,
    /// Total planned schedule minutes.
    pub total_planned_time: i32,
    /// Number of schedule entries on the day.
    pub total_schedule_count: i32,
    /// Number of completed schedule entries.
    pub complete_schedule_count: i32,
    /// Number of finished deep work sessions.
    pub deepwork_session_count: i32,
    /// Average deep work session length in minutes.
    pub avg_deepwork_session: i32,
    /// Whether a memoir was written that day.
    pub is_memoir: bool,
    /// Whether the day kept the activity streak alive.
    pub is_streak: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Freshly computed daily aggregates, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputedDailySummary {
    /// The day being summarized.
    pub date: NaiveDate,
    /// Total completed deep work minutes.
    pub total_deepwork_time: i32,
    /// Total planned schedule minutes.
    pub total_planned_time: i32,
    /// Number of schedule entries on the day.
    pub total_schedule_count: i32,
    /// Number of completed schedule entries.
    pub complete_schedule_count: i32,
    /// Number of finished deep work sessions.
    pub deepwork_session_count: i32,
    /// Average deep work session length in minutes.
    pub avg_deepwork_session: i32,
    /// Whether a memoir was written that day.
    pub is_memoir: bool,
    /// Whether the day kept the activity streak alive.
    pub is_streak: bool,
}
