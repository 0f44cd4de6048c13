//! Summary handlers.

use axum::Json;
use axum::extract::{Query, State};

use momentum_entity::summary::{DailySummary, MonthlySummary, WeeklySummary};

use crate::dto::request::{DailyQuery, MonthlyQuery, WeeklyQuery};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/summaries/daily?date=
pub async fn daily(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DailyQuery>,
) -> ApiResult<Json<DailySummary>> {
    let summary = state.summary_service.daily(&auth, query.date).await?;
    Ok(Json(summary))
}

/// GET /api/summaries/weekly?start_date=
pub async fn weekly(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WeeklyQuery>,
) -> ApiResult<Json<WeeklySummary>> {
    let summary = state.summary_service.weekly(&auth, query.start_date).await?;
    Ok(Json(summary))
}

/// GET /api/summaries/monthly?year=&month=
pub async fn monthly(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<MonthlyQuery>,
) -> ApiResult<Json<MonthlySummary>> {
    let summary = state
        .summary_service
        .monthly(&auth, query.year, query.month)
        .await?;
    Ok(Json(summary))
}

/// POST /api/summaries/daily/rebuild?date=
pub async fn rebuild_daily(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DailyQuery>,
) -> ApiResult<Json<DailySummary>> {
    let summary = state
        .summary_service
        .rebuild_daily(&auth, query.date)
        .await?;
    Ok(Json(summary))
}
