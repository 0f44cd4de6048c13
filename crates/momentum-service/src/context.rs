//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

use momentum_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the verified JWT claims and passed into service methods
/// so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The user's email (JWT subject).
    pub email: String,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, email: String, role: UserRole) -> Self {
        Self {
            user_id,
            email,
            role,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
