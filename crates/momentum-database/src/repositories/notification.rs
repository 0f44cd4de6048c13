//! Notification repository implementation.

use sqlx::PgPool;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::Cursor;
use momentum_entity::notification::{Notification, NotificationCategory};

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification for a user.
    pub async fn create(
        &self,
        user_id: i64,
        category: NotificationCategory,
        content: Option<&str>,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, category, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(category)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to create notification", e)
        })
    }

    /// List the user's notifications newest-first with keyset pagination.
    pub async fn find_by_user(
        &self,
        user_id: i64,
        cursor: Option<&Cursor>,
        size: usize,
    ) -> AppResult<Vec<Notification>> {
        let limit = (size + 1) as i64;
        let result = match cursor {
            Some(c) => {
                sqlx::query_as::<_, Notification>(
                    "SELECT * FROM notifications \
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
                sqlx::query_as::<_, Notification>(
                    "SELECT * FROM notifications WHERE user_id = $1 \
                     ORDER BY created_at DESC, id DESC LIMIT $2",
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        };
        result.map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to list notifications", e)
        })
    }

    /// Count unchecked notifications for a user.
    pub async fn count_unchecked(&self, user_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_checked = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to count unchecked", e)
        })
    }

    /// Mark one notification as checked. Returns the updated row.
    pub async fn check(&self, id: i64, user_id: i64) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET is_checked = TRUE, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to check notification", e)
        })
    }

    /// Mark all of the user's notifications as checked.
    ///
    /// Returns the number of rows changed.
    pub async fn check_all(&self, user_id: i64) -> AppResult<i64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_checked = TRUE, updated_at = NOW() \
             WHERE user_id = $1 AND is_checked = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorCode::DatabaseError, "Failed to check all", e)
        })?;
        Ok(result.rows_affected() as i64)
    }

    /// Delete a notification. Returns whether a row was removed.
    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorCode::DatabaseError, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
