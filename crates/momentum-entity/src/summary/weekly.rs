//! Weekly summary entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schedule::ScheduleCategory;

use super::day_of_week::DayOfWeek;

/// Aggregated statistics for one user over one ISO week.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeeklySummary {
    /// Unique summary identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// First day of the week (Monday).
    pub week_start_date: NaiveDate,
    /// Last day of the week (Sunday).
    pub week_end_date: NaiveDate,
    /// Total completed deep work minutes.
    pub total_deepwork_time: i32,
    /// Total planned schedule minutes.
    pub total_planned_time: i32,
    /// Number of schedule entries in the week.
    pub total_schedule_count: i32,
    /// Number of completed schedule entries.
    pub complete_schedule_count: i32,
    /// Number of finished deep work sessions.
    pub deepwork_session_count: i32,
    /// Average deep work session length in minutes.
    pub avg_deepwork_session: i32,
    /// Number of memoirs written.
    pub memoir_count: i32,
    /// Days with any recorded activity.
    pub active_days: i32,
    /// Consecutive streak days within the week.
    pub streak_days: i32,
    /// Day with the most deep work minutes.
    pub most_productive_day: DayOfWeek,
    /// Category with the highest completion rate.
    pub most_completed_category: ScheduleCategory,
    /// Category with the lowest completion rate.
    pub least_completed_category: ScheduleCategory,
    /// Previous week's deep work minutes, for growth comparison.
    pub prev_week_deepwork_time: i32,
    /// Week-over-week deep work growth rate, percent.
    pub growth_rate: Decimal,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
