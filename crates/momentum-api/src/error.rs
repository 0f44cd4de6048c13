//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::types::response::ApiErrorResponse;

/// Handler result alias; `?` lifts any `AppError` into the HTTP mapping.
pub type ApiResult<T> = Result<T, ApiError>;

/// Newtype carrying an `AppError` across the Axum response boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ErrorCode> for ApiError {
    fn from(code: ErrorCode) -> Self {
        Self(AppError::new(code))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = StatusCode::from_u16(err.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = %err.code, error = %err.message, "request failed");
        }

        let body = ApiErrorResponse {
            code: err.code.code().to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_code() {
        let resp = ApiError::from(ErrorCode::ExpiredToken).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ApiError::from(ErrorCode::DuplicateEmail).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = ApiError::from(ErrorCode::InvalidCursorContentSize).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
