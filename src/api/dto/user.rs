//! User-related DTOs for API requests and responses.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or updating a user.
///
/// Create and update share one shape; `id` is ignored on create and
/// required by the store on update. Email, login, and name presence checks
/// are left to the store's validation ruleset; the birthday is required at
/// the transport boundary.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub birthday: Date,
}

impl UserPayload {
    /// Converts the payload into a User record for the store.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    #[schema(value_type = String, format = Date)]
    pub birthday: Date,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        // Stored users always carry an id, a validated email and login, and
        // a name (the store substitutes the login when it was blank).
        Self {
            id: user.id.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            login: user.login.unwrap_or_default(),
            name: user.name.unwrap_or_default(),
            birthday: user.birthday,
        }
    }
}
