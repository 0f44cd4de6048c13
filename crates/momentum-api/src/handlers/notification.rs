//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use momentum_core::types::cursor::CursorPage;
use momentum_entity::notification::Notification;

use crate::dto::response::{CheckedAllResponse, UnreadCountResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CursorParams};
use crate::state::AppState;

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CursorParams>,
) -> ApiResult<Json<CursorPage<Notification>>> {
    let page = state
        .notification_service
        .list(&auth, params.cursor(), params.page_size())
        .await?;
    Ok(Json(page))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// PUT /api/notifications/{id}/check
pub async fn check(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Notification>> {
    let notification = state.notification_service.check(&auth, id).await?;
    Ok(Json(notification))
}

/// PUT /api/notifications/check-all
pub async fn check_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CheckedAllResponse>> {
    let checked = state.notification_service.check_all(&auth).await?;
    Ok(Json(CheckedAllResponse { checked }))
}

/// DELETE /api/notifications/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.notification_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
