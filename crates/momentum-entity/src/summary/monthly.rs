//! Monthly summary entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schedule::ScheduleCategory;

use super::day_of_week::DayOfWeek;

/// Aggregated statistics for one user over one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlySummary {
    /// Unique summary identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: i32,
    /// Total completed deep work minutes.
    pub total_deepwork_time: i32,
    /// Total planned schedule minutes.
    pub total_planned_time: i32,
    /// Number of schedule entries in the month.
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
    /// Longest streak within the month.
    pub streak_days: i32,
    /// Day of week with the most deep work minutes.
    pub most_productive_day: DayOfWeek,
    /// Category with the highest completion rate.
    pub most_completed_category: ScheduleCategory,
    /// Category with the lowest completion rate.
    pub least_completed_category: ScheduleCategory,
    /// Previous month's deep work minutes, for growth comparison.
    pub prev_month_deepwork_time: i32,
    /// Month-over-month deep work growth rate, percent.
    pub growth_rate: Decimal,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
