//! Schedule repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::Cursor;
use momentum_entity::schedule::{CreateSchedule, Schedule, ScheduleStatus, UpdateSchedule};

/// Repository for schedule CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    pool: PgPool,
}

impl ScheduleRepository {
    /// Create a new schedule repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new schedule in `Pending` status.
    pub async fn create(&self, user_id: i64, schedule: &CreateSchedule) -> AppResult<Schedule> {
        sqlx::query_as::<_, Schedule>(
            "INSERT INTO schedules (user_id, title, start_at, end_at, notify_minutes, category, memo) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(user_id)
        .bind(&schedule.title)
        .bind(schedule.start_at)
        .bind(schedule.end_at)
        .bind(schedule.notify_minutes)
        .bind(schedule.category)
        .bind(&schedule.memo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to create schedule", e)
        })
    }

    /// Find a schedule by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> AppResult<Option<Schedule>> {
        sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorCode::DatabaseError, "Failed to find schedule", e)
            })
    }

    /// List the user's schedules newest-first with keyset pagination.
    pub async fn find_by_user(
        &self,
        user_id: i64,
        cursor: Option<&Cursor>,
        size: usize,
    ) -> AppResult<Vec<Schedule>> {
        let limit = (size + 1) as i64;
        let result = match cursor {
            Some(c) => {
                sqlx::query_as::<_, Schedule>(
                    "SELECT * FROM schedules \
                     WHERE user_id = $1 AND (created_at, id) < ($2, $3) \
                     ORDER BY created_at DESC, id DESC LIMIT $4",
                )
                .bind(user_id)
                .bind(c.last_timestamp.and_utc())
                .bind(c.last_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Schedule>(
                    "SELECT * FROM schedules WHERE user_id = $1 \
                     ORDER BY created_at DESC, id DESC LIMIT $2",
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        };
        result.map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to list schedules", e)
        })
    }

    /// Replace all editable fields of a schedule.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &UpdateSchedule,
    ) -> AppResult<Option<Schedule>> {
        sqlx::query_as::<_, Schedule>(
            "UPDATE schedules SET title = $3, start_at = $4, end_at = $5, \
             notify_minutes = $6, category = $7, memo = $8, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.title)
        .bind(update.start_at)
        .bind(update.end_at)
        .bind(update.notify_minutes)
        .bind(update.category)
        .bind(&update.memo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to update schedule", e)
        })
    }

    /// Change only the lifecycle status.
    pub async fn update_status(
        &self,
        id: i64,
        user_id: i64,
        status: ScheduleStatus,
    ) -> AppResult<Option<Schedule>> {
        sqlx::query_as::<_, Schedule>(
            "UPDATE schedules SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to update schedule status", e)
        })
    }

    /// Delete a schedule. Returns whether a row was removed.
    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorCode::DatabaseError, "Failed to delete schedule", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Schedules overlapping one day, for summary aggregation.
    pub async fn find_on(
        &self,
        user_id: i64,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> AppResult<Vec<Schedule>> {
        sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules \
             WHERE user_id = $1 AND start_at >= $2 AND start_at < $3 \
             ORDER BY start_at",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to list day schedules", e)
        })
    }
}
