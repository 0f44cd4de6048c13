//! Request body and query DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use momentum_entity::schedule::ScheduleStatus;

/// POST /api/auth/signup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email, unique across accounts.
    #[validate(email)]
    pub email: String,
    /// Plaintext password, checked against the configured policy.
    #[validate(length(min = 1))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// PUT /api/schedules/{id}/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// New lifecycle status.
    pub status: ScheduleStatus,
}

/// Query for PUT /api/deepwork/{id}/distraction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistractionParams {
    /// Whether the user pushed through the block.
    #[serde(default, rename = "override")]
    pub overridden: bool,
}

/// Query for GET /api/summaries/daily and POST .../daily/rebuild
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuery {
    /// The calendar date, `YYYY-MM-DD`.
    pub date: chrono::NaiveDate,
}

/// Query for GET /api/summaries/weekly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyQuery {
    /// First day of the week (Monday), `YYYY-MM-DD`.
    pub start_date: chrono::NaiveDate,
}

/// Query for GET /api/summaries/monthly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyQuery {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: i32,
}
