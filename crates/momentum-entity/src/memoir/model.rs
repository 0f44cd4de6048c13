//! Memoir entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::rating::{Concentration, Satisfaction};

/// A daily reflection entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Memoir {
    /// Unique memoir identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Satisfaction self-rating.
    pub satisfaction: Satisfaction,
    /// Concentration self-rating.
    pub concentration: Concentration,
    /// What went well.
    pub achievement: Option<String>,
    /// What fell short.
    pub improvement: Option<String>,
    /// Free-form note.
    pub memo: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a memoir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemoir {
    /// Satisfaction self-rating.
    pub satisfaction: Satisfaction,
    /// Concentration self-rating.
    pub concentration: Concentration,
    /// What went well.
    pub achievement: Option<String>,
    /// What fell short.
    pub improvement: Option<String>,
    /// Free-form note.
    pub memo: Option<String>,
}

/// Full-replace update payload for a memoir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemoir {
    /// Satisfaction self-rating.
    pub satisfaction: Satisfaction,
    /// Concentration self-rating.
    pub concentration: Concentration,
    /// What went well.
    pub achievement: Option<String>,
    /// What fell short.
    pub improvement: Option<String>,
    /// Free-form note.
    pub memo: Option<String>,
}
