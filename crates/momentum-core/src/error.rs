//! Unified application error types for Momentum.
//!
//! Every recognized domain failure carries one [`ErrorCode`] from a closed
//! table; each code is bound to exactly one HTTP status. All crates map
//! their internal errors into [`AppError`] for consistent propagation
//! through the ? operator.

use std::fmt;
use thiserror::Error;

/// Enumerated business error codes.
///
/// The code string groups errors by domain: `A` authentication, `U` user,
/// `V` request validation, `R` resource, `E` server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    /// The presented token is malformed or its signature does not verify.
    InvalidToken,
    /// The token is correctly signed but past its expiration.
    ExpiredToken,
    /// Authentication is required or the supplied credentials are wrong.
    Unauthorized,
    /// The caller is authenticated but not allowed to perform the action.
    Forbidden,
    /// No user exists for the given identifier.
    UserNotFound,
    /// The email address is already registered.
    DuplicateEmail,
    /// The supplied password does not meet requirements.
    InvalidPassword,
    /// Input validation failed.
    InvalidInput,
    /// A required field is missing from the request.
    MissingRequiredField,
    /// A page was assembled from more rows than `requested_size + 1`.
    InvalidCursorContentSize,
    /// The requested resource was not found.
    ResourceNotFound,
    /// The resource already exists.
    ResourceAlreadyExists,
    /// An unexpected internal error occurred.
    InternalServerError,
    /// A database error occurred.
    DatabaseError,
    /// An upstream dependency call failed.
    ExternalApiError,
}

impl ErrorCode {
    /// Return the wire code string (e.g. `"A001"`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "A001",
            Self::ExpiredToken => "A002",
            Self::Unauthorized => "A003",
            Self::Forbidden => "A004",
            Self::UserNotFound => "U001",
            Self::DuplicateEmail => "U002",
            Self::InvalidPassword => "U003",
            Self::InvalidInput => "V001",
            Self::MissingRequiredField => "V002",
            Self::InvalidCursorContentSize => "V003",
            Self::ResourceNotFound => "R001",
            Self::ResourceAlreadyExists => "R002",
            Self::InternalServerError => "E999",
            Self::DatabaseError => "E998",
            Self::ExternalApiError => "E997",
        }
    }

    /// Return the HTTP status bound to this code.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::ExpiredToken | Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::UserNotFound | Self::ResourceNotFound => 404,
            Self::DuplicateEmail | Self::ResourceAlreadyExists => 409,
            Self::InvalidPassword
            | Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidCursorContentSize => 400,
            Self::InternalServerError | Self::DatabaseError => 500,
            Self::ExternalApiError => 502,
        }
    }

    /// Return the default human-readable message for this code.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidToken => "The token is invalid",
            Self::ExpiredToken => "The token has expired",
            Self::Unauthorized => "Authentication is required",
            Self::Forbidden => "Permission denied",
            Self::UserNotFound => "User not found",
            Self::DuplicateEmail => "The email address is already registered",
            Self::InvalidPassword => "The password does not match",
            Self::InvalidInput => "The input is not valid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidCursorContentSize => "Fetched content exceeds the requested page size",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The resource already exists",
            Self::InternalServerError => "An internal server error occurred",
            Self::DatabaseError => "A database error occurred",
            Self::ExternalApiError => "An upstream dependency call failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The unified application error used throughout Momentum.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. The api crate translates the carried
/// [`ErrorCode`] into the HTTP status and error envelope.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// The enumerated error code.
    pub code: ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create an error carrying the code's default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            source: None,
        }
    }

    /// Create an error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an error with a custom message and an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an authentication-required / bad-credentials error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Unauthorized, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Forbidden, message)
    }

    /// Create a resource-not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ResourceNotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidInput, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalServerError, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            code: self.code,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorCode::InternalServerError,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorCode::InternalServerError,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_status_binding() {
        assert_eq!(ErrorCode::InvalidToken.code(), "A001");
        assert_eq!(ErrorCode::InvalidToken.http_status(), 401);
        assert_eq!(ErrorCode::ExpiredToken.code(), "A002");
        assert_eq!(ErrorCode::ExpiredToken.http_status(), 401);
        assert_eq!(ErrorCode::DuplicateEmail.code(), "U002");
        assert_eq!(ErrorCode::DuplicateEmail.http_status(), 409);
        assert_eq!(ErrorCode::InvalidCursorContentSize.code(), "V003");
        assert_eq!(ErrorCode::InvalidCursorContentSize.http_status(), 400);
        assert_eq!(ErrorCode::ExternalApiError.code(), "E997");
        assert_eq!(ErrorCode::ExternalApiError.http_status(), 502);
    }

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::UserNotFound);
        assert_eq!(err.code.code(), "U001");
        assert_eq!(err.message, "User not found");
    }

    #[test]
    fn test_display_carries_code() {
        let err = AppError::unauthorized("Invalid email or password");
        assert_eq!(err.to_string(), "A003: Invalid email or password");
    }
}
