//! Notification listing and acknowledgement.

use std::sync::Arc;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::{Cursor, CursorPage};
use momentum_database::repositories::notification::NotificationRepository;
use momentum_entity::notification::{Notification, NotificationCategory};

use crate::context::RequestContext;

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the user's notifications newest-first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        cursor: Option<&str>,
        size: usize,
    ) -> AppResult<CursorPage<Notification>> {
        let cursor = cursor.and_then(Cursor::decode);
        let rows = self
            .notification_repo
            .find_by_user(ctx.user_id, cursor.as_ref(), size)
            .await?;
        CursorPage::of(rows, size, |n| {
            Cursor::new(n.id, n.created_at.naive_utc())
        })
    }

    /// Counts unchecked notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notification_repo.count_unchecked(ctx.user_id).await
    }

    /// Marks one notification as checked.
    pub async fn check(&self, ctx: &RequestContext, id: i64) -> AppResult<Notification> {
        self.notification_repo
            .check(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Marks all of the user's notifications as checked.
    ///
    /// Returns the number of notifications affected.
    pub async fn check_all(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notification_repo.check_all(ctx.user_id).await
    }

    /// Deletes a notification.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if self.notification_repo.delete(id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::ResourceNotFound))
        }
    }

    /// Delivers a new notification to a user.
    pub async fn notify(
        &self,
        user_id: i64,
        category: NotificationCategory,
        content: Option<&str>,
    ) -> AppResult<Notification> {
        self.notification_repo
            .create(user_id, category, content)
            .await
    }
}
