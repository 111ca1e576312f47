//! User-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Convert a BSON timestamp into a chrono UTC timestamp.
pub fn to_utc(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// User data returned in API responses (without sensitive fields)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Display name
    #[schema(example = "saver")]
    pub name: String,
    /// Username chosen at signup (absent for Google-only accounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "saver")]
    pub username: Option<String>,
    /// User's email address
    #[schema(example = "saver@example.com")]
    pub email: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user last logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            username: user.username,
            email: user.email,
            created_at: to_utc(user.created_at),
            last_login: user.last_login.map(to_utc),
        }
    }
}

/// Response for successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    pub message: String,
    /// JWT token for authentication
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// User information
    pub user: UserResponse,
}
