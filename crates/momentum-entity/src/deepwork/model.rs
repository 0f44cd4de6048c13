//! Deep work session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A focused work session tracked for one user.
///
/// A session is open while `end_time` is `None`. Distraction counters track
/// how often the client blocked an app launch and how often the user pushed
/// through the block anyway.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeepWorkSession {
    /// Unique session identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// When the session started.
    pub start_time: DateTime<Utc>,
    /// When the session ended, if it has.
    pub end_time: Option<DateTime<Utc>>,
    /// Number of blocked app launches during the session.
    pub distraction_count: i64,
    /// Number of times a block was overridden.
    pub distraction_override_count: i64,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl DeepWorkSession {
    /// Whether the session is still running.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Session duration in whole minutes, `None` while still open.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_minutes())
    }
}
