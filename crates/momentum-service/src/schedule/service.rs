//! Schedule CRUD and status transitions.

use std::sync::Arc;

use tracing::{info, warn};

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::{Cursor, CursorPage};
use momentum_database::repositories::schedule::ScheduleRepository;
use momentum_entity::notification::NotificationCategory;
use momentum_entity::schedule::{CreateSchedule, Schedule, ScheduleStatus, UpdateSchedule};

use crate::context::RequestContext;
use crate::notification::service::NotificationService;

/// Manages calendar schedules.
#[derive(Debug, Clone)]
pub struct ScheduleService {
    /// Schedule repository.
    schedule_repo: Arc<ScheduleRepository>,
    /// Delivers schedule lifecycle notifications.
    notifications: Arc<NotificationService>,
}

impl ScheduleService {
    /// Creates a new schedule service.
    pub fn new(
        schedule_repo: Arc<ScheduleRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            schedule_repo,
            notifications,
        }
    }

    /// Creates a schedule in `Pending` status.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        schedule: CreateSchedule,
    ) -> AppResult<Schedule> {
        validate_window(&schedule.title, schedule.start_at, schedule.end_at)?;

        let created = self.schedule_repo.create(ctx.user_id, &schedule).await?;
        info!(user_id = ctx.user_id, schedule_id = created.id, "schedule created");
        Ok(created)
    }

    /// Fetches one schedule.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<Schedule> {
        self.schedule_repo
            .find_by_id(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Lists the user's schedules newest-first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        cursor: Option<&str>,
        size: usize,
    ) -> AppResult<CursorPage<Schedule>> {
        let cursor = cursor.and_then(Cursor::decode);
        let rows = self
            .schedule_repo
            .find_by_user(ctx.user_id, cursor.as_ref(), size)
            .await?;
        CursorPage::of(rows, size, |s| {
            Cursor::new(s.id, s.created_at.naive_utc())
        })
    }

    /// Replaces all editable fields of a schedule.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: UpdateSchedule,
    ) -> AppResult<Schedule> {
        validate_window(&update.title, update.start_at, update.end_at)?;

        self.schedule_repo
            .update(id, ctx.user_id, &update)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Changes only the lifecycle status.
    ///
    /// Reaching a terminal status records an event notification.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: i64,
        status: ScheduleStatus,
    ) -> AppResult<Schedule> {
        let schedule = self
            .schedule_repo
            .update_status(id, ctx.user_id, status)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))?;

        if let Some(notice) = status_notice(&schedule) {
            // A failed notification must not undo the status change.
            if let Err(e) = self
                .notifications
                .notify(ctx.user_id, NotificationCategory::Event, Some(&notice))
                .await
            {
                warn!(user_id = ctx.user_id, error = %e, "notification write failed");
            }
        }

        Ok(schedule)
    }

    /// Deletes a schedule.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if self.schedule_repo.delete(id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::ResourceNotFound))
        }
    }
}

/// Notification text for a schedule reaching a terminal status.
///
/// Intermediate statuses produce no notification.
fn status_notice(schedule: &Schedule) -> Option<String> {
    match schedule.status {
        ScheduleStatus::Completed => Some(format!("Schedule '{}' completed", schedule.title)),
        ScheduleStatus::Failed => Some(format!("Schedule '{}' failed", schedule.title)),
        ScheduleStatus::Pending | ScheduleStatus::InProgress => None,
    }
}

/// Rejects empty titles and inverted time windows.
fn validate_window(
    title: &str,
    start_at: chrono::DateTime<chrono::Utc>,
    end_at: chrono::DateTime<chrono::Utc>,
) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::new(ErrorCode::MissingRequiredField));
    }
    if end_at <= start_at {
        return Err(AppError::validation("end_at must be after start_at"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_rejects_empty_title() {
        let now = Utc::now();
        let err = validate_window("  ", now, now + Duration::hours(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_rejects_inverted_window() {
        let now = Utc::now();
        let err = validate_window("standup", now, now - Duration::minutes(5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_accepts_valid_window() {
        let now = Utc::now();
        assert!(validate_window("standup", now, now + Duration::minutes(30)).is_ok());
    }

    fn schedule_with_status(status: ScheduleStatus) -> Schedule {
        let now = Utc::now();
        Schedule {
            id: 1,
            user_id: 1,
            title: "standup".to_string(),
            start_at: now,
            end_at: now + Duration::minutes(30),
            notify_minutes: momentum_entity::schedule::NotifyMinutes::None,
            category: momentum_entity::schedule::ScheduleCategory::Work,
            status,
            memo: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_terminal_statuses_produce_a_notice() {
        let done = schedule_with_status(ScheduleStatus::Completed);
        assert_eq!(
            status_notice(&done).as_deref(),
            Some("Schedule 'standup' completed")
        );

        let failed = schedule_with_status(ScheduleStatus::Failed);
        assert_eq!(
            status_notice(&failed).as_deref(),
            Some("Schedule 'standup' failed")
        );
    }

    #[test]
    fn test_intermediate_statuses_stay_silent() {
        assert!(status_notice(&schedule_with_status(ScheduleStatus::Pending)).is_none());
        assert!(status_notice(&schedule_with_status(ScheduleStatus::InProgress)).is_none());
    }
}
