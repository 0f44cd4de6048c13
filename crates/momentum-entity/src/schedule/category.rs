//! Schedule category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a schedule entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "schedule_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScheduleCategory {
    /// Work commitments.
    Work,
    /// Personal errands.
    Personal,
    /// Health and fitness.
    Health,
    /// Study and learning.
    Study,
    /// Everything else.
    Other,
}

impl ScheduleCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Study => "study",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ScheduleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScheduleCategory {
    type Err = momentum_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "health" => Ok(Self::Health),
            "study" => Ok(Self::Study),
            "other" => Ok(Self::Other),
            _ => Err(momentum_core::AppError::validation(format!(
                "Invalid schedule category: '{s}'. Expected one of: work, personal, health, study, other"
            ))),
        }
    }
}
