//! JWT claims structure used in access tokens.

use serde::{Deserialize, Serialize};

/// JWT claims payload embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email address.
    pub sub: String,
    /// Granted authorities at the time of token issuance.
    pub authorities: Vec<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
