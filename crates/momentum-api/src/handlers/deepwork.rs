//! Deep work session handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use momentum_core::types::cursor::CursorPage;
use momentum_entity::deepwork::DeepWorkSession;

use crate::dto::request::DistractionParams;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CursorParams};
use crate::state::AppState;

/// POST /api/deepwork
pub async fn start(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<(StatusCode, Json<DeepWorkSession>)> {
    let session = state.deepwork_service.start(&auth).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// PUT /api/deepwork/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeepWorkSession>> {
    let session = state.deepwork_service.finish(&auth, id).await?;
    Ok(Json(session))
}

/// PUT /api/deepwork/{id}/distraction
pub async fn distraction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Query(params): Query<DistractionParams>,
) -> ApiResult<Json<DeepWorkSession>> {
    let session = state
        .deepwork_service
        .record_distraction(&auth, id, params.overridden)
        .await?;
    Ok(Json(session))
}

/// GET /api/deepwork
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CursorParams>,
) -> ApiResult<Json<CursorPage<DeepWorkSession>>> {
    let page = state
        .deepwork_service
        .list(&auth, params.cursor(), params.page_size())
        .await?;
    Ok(Json(page))
}

/// GET /api/deepwork/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeepWorkSession>> {
    let session = state.deepwork_service.get(&auth, id).await?;
    Ok(Json(session))
}

/// DELETE /api/deepwork/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.deepwork_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
