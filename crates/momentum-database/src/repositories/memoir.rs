//! Memoir repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::Cursor;
use momentum_entity::memoir::{CreateMemoir, Memoir, UpdateMemoir};

/// Repository for memoir CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MemoirRepository {
    pool: PgPool,
}

impl MemoirRepository {
    /// Create a new memoir repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new memoir.
    pub async fn create(&self, user_id: i64, memoir: &CreateMemoir) -> AppResult<Memoir> {
        sqlx::query_as::<_, Memoir>(
            "INSERT INTO memoirs (user_id, satisfaction, concentration, achievement, improvement, memo) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(user_id)
        .bind(memoir.satisfaction)
        .bind(memoir.concentration)
        .bind(&memoir.achievement)
        .bind(&memoir.improvement)
        .bind(&memoir.memo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorCode::DatabaseError, "Failed to create memoir", e))
    }

    /// Find a memoir by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> AppResult<Option<Memoir>> {
        sqlx::query_as::<_, Memoir>("SELECT * FROM memoirs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorCode::DatabaseError, "Failed to find memoir", e)
            })
    }

    /// List the user's memoirs newest-first with keyset pagination.
    pub async fn find_by_user(
        &self,
        user_id: i64,
        cursor: Option<&Cursor>,
        size: usize,
    ) -> AppResult<Vec<Memoir>> {
        let limit = (size + 1) as i64;
        let result = match cursor {
            Some(c) => {
                sqlx::query_as::<_, Memoir>(
                    "SELECT * FROM memoirs \
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
                sqlx::query_as::<_, Memoir>(
                    "SELECT * FROM memoirs WHERE user_id = $1 \
                     ORDER BY created_at DESC, id DESC LIMIT $2",
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        };
        result.map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to list memoirs", e)
        })
    }

    /// Replace all editable fields of a memoir.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &UpdateMemoir,
    ) -> AppResult<Option<Memoir>> {
        sqlx::query_as::<_, Memoir>(
            "UPDATE memoirs SET satisfaction = $3, concentration = $4, achievement = $5, \
             improvement = $6, memo = $7, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(update.satisfaction)
        .bind(update.concentration)
        .bind(&update.achievement)
        .bind(&update.improvement)
        .bind(&update.memo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorCode::DatabaseError, "Failed to update memoir", e))
    }

    /// Delete a memoir. Returns whether a row was removed.
    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM memoirs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorCode::DatabaseError, "Failed to delete memoir", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the user wrote any memoir on one day.
    pub async fn exists_on(
        &self,
        user_id: i64,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM memoirs \
             WHERE user_id = $1 AND created_at >= $2 AND created_at < $3)",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to check memoir existence", e)
        })
    }
}
