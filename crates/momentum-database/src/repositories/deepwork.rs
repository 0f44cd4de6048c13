//! Deep work session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::Cursor;
use momentum_entity::deepwork::DeepWorkSession;

/// Repository for deep work session CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DeepWorkRepository {
    pool: PgPool,
}

impl DeepWorkRepository {
    /// Create a new deep work repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new open session.
    pub async fn create(
        &self,
        user_id: i64,
        start_time: DateTime<Utc>,
    ) -> AppResult<DeepWorkSession> {
        sqlx::query_as::<_, DeepWorkSession>(
            "INSERT INTO deepwork_sessions (user_id, start_time) \
             VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(start_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to create session", e)
        })
    }

    /// Find a session by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> AppResult<Option<DeepWorkSession>> {
        sqlx::query_as::<_, DeepWorkSession>(
            "SELECT * FROM deepwork_sessions WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorCode::DatabaseError, "Failed to find session", e))
    }

    /// Find the user's currently open session, if any.
    pub async fn find_open(&self, user_id: i64) -> AppResult<Option<DeepWorkSession>> {
        sqlx::query_as::<_, DeepWorkSession>(
            "SELECT * FROM deepwork_sessions WHERE user_id = $1 AND end_time IS NULL \
             ORDER BY start_time DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to find open session", e)
        })
    }

    /// Close an open session by setting its end time.
    pub async fn finish(
        &self,
        id: i64,
        user_id: i64,
        end_time: DateTime<Utc>,
    ) -> AppResult<Option<DeepWorkSession>> {
        sqlx::query_as::<_, DeepWorkSession>(
            "UPDATE deepwork_sessions SET end_time = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND end_time IS NULL RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(end_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to finish session", e)
        })
    }

    /// Record a distraction, optionally counting an override as well.
    pub async fn increment_distraction(
        &self,
        id: i64,
        user_id: i64,
        overridden: bool,
    ) -> AppResult<Option<DeepWorkSession>> {
        sqlx::query_as::<_, DeepWorkSession>(
            "UPDATE deepwork_sessions SET \
             distraction_count = distraction_count + 1, \
             distraction_override_count = distraction_override_count + CASE WHEN $3 THEN 1 ELSE 0 END, \
             updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND end_time IS NULL RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(overridden)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to record distraction", e)
        })
    }

    /// List the user's sessions newest-first with keyset pagination.
    ///
    /// Fetches `size + 1` rows so the caller can detect a further page.
    pub async fn find_by_user(
        &self,
        user_id: i64,
        cursor: Option<&Cursor>,
        size: usize,
    ) -> AppResult<Vec<DeepWorkSession>> {
        let limit = (size + 1) as i64;
        let result = match cursor {
            Some(c) => {
                sqlx::query_as::<_, DeepWorkSession>(
                    "SELECT * FROM deepwork_sessions \
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
                sqlx::query_as::<_, DeepWorkSession>(
                    "SELECT * FROM deepwork_sessions WHERE user_id = $1 \
                     ORDER BY created_at DESC, id DESC LIMIT $2",
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        };
        result.map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to list sessions", e)
        })
    }

    /// Delete a session. Returns whether a row was removed.
    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM deepwork_sessions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorCode::DatabaseError, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Total finished deep work minutes for the user on one day.
    pub async fn total_minutes_on(
        &self,
        user_id: i64,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(EXTRACT(EPOCH FROM (end_time - start_time)) / 60), 0)::BIGINT \
             FROM deepwork_sessions \
             WHERE user_id = $1 AND end_time IS NOT NULL \
             AND start_time >= $2 AND start_time < $3",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to sum session minutes", e)
        })
    }

    /// Number of finished sessions for the user on one day.
    pub async fn count_finished_on(
        &self,
        user_id: i64,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM deepwork_sessions \
             WHERE user_id = $1 AND end_time IS NOT NULL \
             AND start_time >= $2 AND start_time < $3",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to count sessions", e)
        })
    }
}
