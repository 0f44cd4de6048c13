//! Summary repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_entity::summary::{ComputedDailySummary, DailySummary, MonthlySummary, WeeklySummary};

/// Repository for daily, weekly, and monthly summary rows.
#[derive(Debug, Clone)]
pub struct SummaryRepository {
    pool: PgPool,
}

impl SummaryRepository {
    /// Create a new summary repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the daily summary for one date.
    pub async fn find_daily(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> AppResult<Option<DailySummary>> {
        sqlx::query_as::<_, DailySummary>(
            "SELECT * FROM daily_summaries WHERE user_id = $1 AND date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to find daily summary", e)
        })
    }

    /// Fetch the weekly summary starting on the given Monday.
    pub async fn find_weekly(
        &self,
        user_id: i64,
        week_start_date: NaiveDate,
    ) -> AppResult<Option<WeeklySummary>> {
        sqlx::query_as::<_, WeeklySummary>(
            "SELECT * FROM weekly_summaries WHERE user_id = $1 AND week_start_date = $2",
        )
        .bind(user_id)
        .bind(week_start_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to find weekly summary", e)
        })
    }

    /// Fetch the monthly summary for one calendar month.
    pub async fn find_monthly(
        &self,
        user_id: i64,
        year: i32,
        month: i32,
    ) -> AppResult<Option<MonthlySummary>> {
        sqlx::query_as::<_, MonthlySummary>(
            "SELECT * FROM monthly_summaries WHERE user_id = $1 AND year = $2 AND month = $3",
        )
        .bind(user_id)
        .bind(year)
        .bind(month)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to find monthly summary", e)
        })
    }

    /// Insert or replace the daily summary for one date.
    pub async fn upsert_daily(
        &self,
        user_id: i64,
        summary: &ComputedDailySummary,
    ) -> AppResult<DailySummary> {
        sqlx::query_as::<_, DailySummary>(
            "INSERT INTO daily_summaries \
             (user_id, date, total_deepwork_time, total_planned_time, total_schedule_count, \
              complete_schedule_count, deepwork_session_count, avg_deepwork_session, \
              is_memoir, is_streak) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (user_id, date) DO UPDATE SET \
              total_deepwork_time = EXCLUDED.total_deepwork_time, \
              total_planned_time = EXCLUDED.total_planned_time, \
              total_schedule_count = EXCLUDED.total_schedule_count, \
              complete_schedule_count = EXCLUDED.complete_schedule_count, \
              deepwork_session_count = EXCLUDED.deepwork_session_count, \
              avg_deepwork_session = EXCLUDED.avg_deepwork_session, \
              is_memoir = EXCLUDED.is_memoir, \
              is_streak = EXCLUDED.is_streak, \
              updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(summary.date)
        .bind(summary.total_deepwork_time)
        .bind(summary.total_planned_time)
        .bind(summary.total_schedule_count)
        .bind(summary.complete_schedule_count)
        .bind(summary.deepwork_session_count)
        .bind(summary.avg_deepwork_session)
        .bind(summary.is_memoir)
        .bind(summary.is_streak)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to upsert daily summary", e)
        })
    }
}
