//! Response envelope types shared with the API layer.

use serde::{Deserialize, Serialize};

/// Standard API error response body.
///
/// `code` is one of the enumerated wire codes (e.g. `"A001"`); the HTTP
/// status is fixed per code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
