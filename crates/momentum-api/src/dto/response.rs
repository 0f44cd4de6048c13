//! Response body DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use momentum_entity::user::User;

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT access token.
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    /// Wraps a freshly issued access token.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// GET /api/notifications/unread-count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    /// Number of unchecked notifications.
    pub count: i64,
}

/// PUT /api/notifications/check-all
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedAllResponse {
    /// Number of notifications newly marked as checked.
    pub checked: i64,
}
