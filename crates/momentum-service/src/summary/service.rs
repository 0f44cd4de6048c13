//! Summary lookups and request-driven daily aggregation.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc, Weekday};
use tracing::info;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_database::repositories::deepwork::DeepWorkRepository;
use momentum_database::repositories::memoir::MemoirRepository;
use momentum_database::repositories::schedule::ScheduleRepository;
use momentum_database::repositories::summary::SummaryRepository;
use momentum_entity::schedule::Schedule;
use momentum_entity::summary::{ComputedDailySummary, DailySummary, MonthlySummary, WeeklySummary};

use crate::context::RequestContext;

/// Serves stored summaries and recomputes daily aggregates on demand.
#[derive(Debug, Clone)]
pub struct SummaryService {
    /// Summary row storage.
    summary_repo: Arc<SummaryRepository>,
    /// Source data: deep work sessions.
    deepwork_repo: Arc<DeepWorkRepository>,
    /// Source data: schedules.
    schedule_repo: Arc<ScheduleRepository>,
    /// Source data: memoirs.
    memoir_repo: Arc<MemoirRepository>,
}

impl SummaryService {
    /// Creates a new summary service.
    pub fn new(
        summary_repo: Arc<SummaryRepository>,
        deepwork_repo: Arc<DeepWorkRepository>,
        schedule_repo: Arc<ScheduleRepository>,
        memoir_repo: Arc<MemoirRepository>,
    ) -> Self {
        Self {
            summary_repo,
            deepwork_repo,
            schedule_repo,
            memoir_repo,
        }
    }

    /// Fetches the stored daily summary for one date.
    pub async fn daily(&self, ctx: &RequestContext, date: NaiveDate) -> AppResult<DailySummary> {
        self.summary_repo
            .find_daily(ctx.user_id, date)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Fetches the stored weekly summary. `start_date` must be a Monday.
    pub async fn weekly(
        &self,
        ctx: &RequestContext,
        start_date: NaiveDate,
    ) -> AppResult<WeeklySummary> {
        if start_date.weekday() != Weekday::Mon {
            return Err(AppError::validation("start_date must be a Monday"));
        }
        self.summary_repo
            .find_weekly(ctx.user_id, start_date)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Fetches the stored monthly summary.
    pub async fn monthly(
        &self,
        ctx: &RequestContext,
        year: i32,
        month: i32,
    ) -> AppResult<MonthlySummary> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation("month must be between 1 and 12"));
        }
        self.summary_repo
            .find_monthly(ctx.user_id, year, month)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Recomputes and stores one day's aggregates from the source tables.
    pub async fn rebuild_daily(
        &self,
        ctx: &RequestContext,
        date: NaiveDate,
    ) -> AppResult<DailySummary> {
        let (day_start, day_end) = day_bounds(date)?;

        let deepwork_minutes = self
            .deepwork_repo
            .total_minutes_on(ctx.user_id, day_start, day_end)
            .await?;
        let session_count = self
            .deepwork_repo
            .count_finished_on(ctx.user_id, day_start, day_end)
            .await?;
        let schedules = self
            .schedule_repo
            .find_on(ctx.user_id, day_start, day_end)
            .await?;
        let is_memoir = self
            .memoir_repo
            .exists_on(ctx.user_id, day_start, day_end)
            .await?;

        let computed = summarize(date, deepwork_minutes, session_count, &schedules, is_memoir);
        let stored = self.summary_repo.upsert_daily(ctx.user_id, &computed).await?;

        info!(
            user_id = ctx.user_id,
            date = %date,
            deepwork_minutes,
            "daily summary rebuilt"
        );
        Ok(stored)
    }
}

/// UTC day window `[00:00, next day 00:00)` for one calendar date.
fn day_bounds(date: NaiveDate) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = date
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::validation("date out of range"))?
        .and_time(NaiveTime::MIN)
        .and_utc();
    Ok((start, end))
}

/// Folds the day's raw rows into the stored aggregate shape.
///
/// A day counts toward the streak when it has any finished deep work,
/// any completed schedule, or a memoir.
fn summarize(
    date: NaiveDate,
    deepwork_minutes: i64,
    session_count: i64,
    schedules: &[Schedule],
    is_memoir: bool,
) -> ComputedDailySummary {
    let total_schedule_count = schedules.len() as i32;
    let complete_schedule_count =
        schedules.iter().filter(|s| s.status.is_completed()).count() as i32;
    let total_planned_time: i64 = schedules.iter().map(Schedule::planned_minutes).sum();

    let avg_deepwork_session = if session_count > 0 {
        (deepwork_minutes / session_count) as i32
    } else {
        0
    };

    let is_streak = deepwork_minutes > 0 || complete_schedule_count > 0 || is_memoir;

    ComputedDailySummary {
        date,
        total_deepwork_time: deepwork_minutes as i32,
        total_planned_time: total_planned_time as i32,
        total_schedule_count,
        complete_schedule_count,
        deepwork_session_count: session_count as i32,
        avg_deepwork_session,
        is_memoir,
        is_streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use momentum_entity::schedule::{NotifyMinutes, ScheduleCategory, ScheduleStatus};

    fn schedule(status: ScheduleStatus, minutes: i64) -> Schedule {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        Schedule {
            id: 1,
            user_id: 1,
            title: "block".to_string(),
            start_at: start,
            end_at: start + Duration::minutes(minutes),
            notify_minutes: NotifyMinutes::Minutes10,
            category: ScheduleCategory::Work,
            status,
            memo: None,
            created_at: start,
            updated_at: start,
        }
    }

    #[test]
    fn test_summarize_counts_and_averages() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let schedules = vec![
            schedule(ScheduleStatus::Completed, 60),
            schedule(ScheduleStatus::Pending, 30),
        ];

        let s = summarize(date, 150, 3, &schedules, true);

        assert_eq!(s.total_deepwork_time, 150);
        assert_eq!(s.deepwork_session_count, 3);
        assert_eq!(s.avg_deepwork_session, 50);
        assert_eq!(s.total_schedule_count, 2);
        assert_eq!(s.complete_schedule_count, 1);
        assert_eq!(s.total_planned_time, 90);
        assert!(s.is_memoir);
        assert!(s.is_streak);
    }

    #[test]
    fn test_summarize_empty_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let s = summarize(date, 0, 0, &[], false);

        assert_eq!(s.avg_deepwork_session, 0);
        assert!(!s.is_streak);
    }

    #[test]
    fn test_day_bounds_span_24_hours() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (start, end) = day_bounds(date).unwrap();
        assert_eq!(end - start, Duration::days(1));
    }
}
