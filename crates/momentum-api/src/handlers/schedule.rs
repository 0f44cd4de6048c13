//! Schedule handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use momentum_core::types::cursor::CursorPage;
use momentum_entity::schedule::{CreateSchedule, Schedule, UpdateSchedule};

use crate::dto::request::UpdateStatusRequest;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CursorParams};
use crate::state::AppState;

/// POST /api/schedules
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSchedule>,
) -> ApiResult<(StatusCode, Json<Schedule>)> {
    let schedule = state.schedule_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// GET /api/schedules
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CursorParams>,
) -> ApiResult<Json<CursorPage<Schedule>>> {
    let page = state
        .schedule_service
        .list(&auth, params.cursor(), params.page_size())
        .await?;
    Ok(Json(page))
}

/// GET /api/schedules/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state.schedule_service.get(&auth, id).await?;
    Ok(Json(schedule))
}

/// PUT /api/schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSchedule>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state.schedule_service.update(&auth, id, req).await?;
    Ok(Json(schedule))
}

/// PUT /api/schedules/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state
        .schedule_service
        .update_status(&auth, id, req.status)
        .await?;
    Ok(Json(schedule))
}

/// DELETE /api/schedules/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.schedule_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
