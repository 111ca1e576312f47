//! Authentication request models.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validators::validate_username_format;

/// Request payload for user signup
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "saver@example.com")]
    pub email: String,
    /// Unique username (3-50 characters, letters, numbers, underscores, hyphens only)
    #[validate(
        length(
            min = 3,
            max = 50,
            message = "Username must be between 3 and 50 characters"
        ),
        custom(function = "validate_username_format")
    )]
    #[schema(example = "saver")]
    pub username: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

/// Request payload for user login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "saver@example.com")]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

/// Query string Google sends back to the callback URL
#[derive(Debug, Deserialize, IntoParams)]
pub struct GoogleCallbackQuery {
    /// CSRF state issued by `/auth/google/login`
    pub state: Option<String>,
    /// Authorization code to exchange for an access token
    pub code: Option<String>,
}
