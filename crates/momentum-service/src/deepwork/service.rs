//! Deep work session lifecycle management.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::{Cursor, CursorPage};
use momentum_database::repositories::deepwork::DeepWorkRepository;
use momentum_entity::deepwork::DeepWorkSession;
use momentum_entity::notification::NotificationCategory;

use crate::context::RequestContext;
use crate::notification::service::NotificationService;

/// Manages deep work sessions: start, finish, distraction counting.
#[derive(Debug, Clone)]
pub struct DeepWorkService {
    /// Session repository.
    deepwork_repo: Arc<DeepWorkRepository>,
    /// Delivers the session-finished notification.
    notifications: Arc<NotificationService>,
}

impl DeepWorkService {
    /// Creates a new deep work service.
    pub fn new(
        deepwork_repo: Arc<DeepWorkRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            deepwork_repo,
            notifications,
        }
    }

    /// Starts a new session. Only one session may be open at a time.
    pub async fn start(&self, ctx: &RequestContext) -> AppResult<DeepWorkSession> {
        if self.deepwork_repo.find_open(ctx.user_id).await?.is_some() {
            return Err(AppError::conflict("A deep work session is already open"));
        }

        let session = self.deepwork_repo.create(ctx.user_id, Utc::now()).await?;
        info!(user_id = ctx.user_id, session_id = session.id, "session started");
        Ok(session)
    }

    /// Closes an open session and records a finished notification.
    pub async fn finish(&self, ctx: &RequestContext, id: i64) -> AppResult<DeepWorkSession> {
        match self.deepwork_repo.finish(id, ctx.user_id, Utc::now()).await? {
            Some(session) => {
                let minutes = session.duration_minutes().unwrap_or(0);
                info!(
                    user_id = ctx.user_id,
                    session_id = session.id,
                    minutes,
                    "session finished"
                );

                // A failed notification must not undo the finish itself.
                if let Err(e) = self
                    .notifications
                    .notify(
                        ctx.user_id,
                        NotificationCategory::Event,
                        Some(&finish_notice(minutes)),
                    )
                    .await
                {
                    warn!(user_id = ctx.user_id, error = %e, "notification write failed");
                }

                Ok(session)
            }
            None => Err(self.closed_or_missing(ctx, id).await?),
        }
    }

    /// Records a distraction on an open session.
    ///
    /// With `overridden` set, the user pushed through the block and the
    /// override counter advances as well.
    pub async fn record_distraction(
        &self,
        ctx: &RequestContext,
        id: i64,
        overridden: bool,
    ) -> AppResult<DeepWorkSession> {
        match self
            .deepwork_repo
            .increment_distraction(id, ctx.user_id, overridden)
            .await?
        {
            Some(session) => Ok(session),
            None => Err(self.closed_or_missing(ctx, id).await?),
        }
    }

    /// Fetches one session.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<DeepWorkSession> {
        self.deepwork_repo
            .find_by_id(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Lists the user's sessions newest-first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        cursor: Option<&str>,
        size: usize,
    ) -> AppResult<CursorPage<DeepWorkSession>> {
        let cursor = cursor.and_then(Cursor::decode);
        let rows = self
            .deepwork_repo
            .find_by_user(ctx.user_id, cursor.as_ref(), size)
            .await?;
        CursorPage::of(rows, size, |s| {
            Cursor::new(s.id, s.created_at.naive_utc())
        })
    }

    /// Deletes a session.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if self.deepwork_repo.delete(id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::ResourceNotFound))
        }
    }

    /// Distinguishes "already finished" from "not yours / missing" after a
    /// conditional update matched no row.
    async fn closed_or_missing(&self, ctx: &RequestContext, id: i64) -> AppResult<AppError> {
        Ok(
            match self.deepwork_repo.find_by_id(id, ctx.user_id).await? {
                Some(_) => AppError::validation("The session is already finished"),
                None => AppError::new(ErrorCode::ResourceNotFound),
            },
        )
    }
}

/// Notification text for a finished session.
fn finish_notice(minutes: i64) -> String {
    format!("Deep work session finished: {minutes} min")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_notice_carries_duration() {
        assert_eq!(finish_notice(52), "Deep work session finished: 52 min");
    }
}
