//! Self-rating enumerations used by memoir entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How satisfied the user felt about the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "satisfaction", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Satisfaction {
    VerySatisfied,
    Satisfied,
    Neutral,
    Dissatisfied,
    VeryDissatisfied,
}

impl Satisfaction {
    /// Return the rating as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerySatisfied => "very_satisfied",
            Self::Satisfied => "satisfied",
            Self::Neutral => "neutral",
            Self::Dissatisfied => "dissatisfied",
            Self::VeryDissatisfied => "very_dissatisfied",
        }
    }
}

impl fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Satisfaction {
    type Err = momentum_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "very_satisfied" => Ok(Self::VerySatisfied),
            "satisfied" => Ok(Self::Satisfied),
            "neutral" => Ok(Self::Neutral),
            "dissatisfied" => Ok(Self::Dissatisfied),
            "very_dissatisfied" => Ok(Self::VeryDissatisfied),
            _ => Err(momentum_core::AppError::validation(format!(
                "Invalid satisfaction rating: '{s}'"
            ))),
        }
    }
}

/// How well the user could concentrate during the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "concentration", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Concentration {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl Concentration {
    /// Return the rating as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryHigh => "very_high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very_low",
        }
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Concentration {
    type Err = momentum_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "very_high" => Ok(Self::VeryHigh),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "very_low" => Ok(Self::VeryLow),
            _ => Err(momentum_core::AppError::validation(format!(
                "Invalid concentration rating: '{s}'"
            ))),
        }
    }
}
