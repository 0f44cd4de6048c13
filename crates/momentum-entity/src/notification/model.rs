//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::NotificationCategory;

/// A notification delivered to one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: i64,
    /// The recipient user.
    pub user_id: i64,
    /// Notification category.
    pub category: NotificationCategory,
    /// Notification body text.
    pub content: Option<String>,
    /// Whether the user has acknowledged it.
    pub is_checked: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
