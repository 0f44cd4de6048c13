//! Memoir handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use momentum_core::types::cursor::CursorPage;
use momentum_entity::memoir::{CreateMemoir, Memoir, UpdateMemoir};

use crate::error::ApiResult;
use crate::extractors::{AuthUser, CursorParams};
use crate::state::AppState;

/// POST /api/memoirs
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMemoir>,
) -> ApiResult<(StatusCode, Json<Memoir>)> {
    let memoir = state.memoir_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(memoir)))
}

/// GET /api/memoirs
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CursorParams>,
) -> ApiResult<Json<CursorPage<Memoir>>> {
    let page = state
        .memoir_service
        .list(&auth, params.cursor(), params.page_size())
        .await?;
    Ok(Json(page))
}

/// GET /api/memoirs/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Memoir>> {
    let memoir = state.memoir_service.get(&auth, id).await?;
    Ok(Json(memoir))
}

/// PUT /api/memoirs/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMemoir>,
) -> ApiResult<Json<Memoir>> {
    let memoir = state.memoir_service.update(&auth, id, req).await?;
    Ok(Json(memoir))
}

/// DELETE /api/memoirs/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.memoir_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
