//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";

// OAuth errors
pub const ERR_INVALID_OAUTH_STATE: &str = "Invalid OAuth state";
pub const ERR_MISSING_OAUTH_CODE: &str = "Authorization code not provided";
pub const ERR_OAUTH_NOT_CONFIGURED: &str = "Google OAuth is not configured";
pub const ERR_OAUTH_EXCHANGE_FAILED: &str = "Failed to exchange authorization code";
pub const ERR_GOOGLE_EMAIL_UNVERIFIED: &str = "Google account email is not verified";
pub const ERR_OAUTH_USERINFO_FAILED: &str = "Failed to fetch Google user information";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";
pub const ERR_USERNAME_EXISTS: &str = "Username already taken";

// Goal errors
pub const ERR_GOAL_NOT_FOUND: &str = "Goal not found";
pub const ERR_INVALID_GOAL_ID: &str = "Invalid goal ID format";
pub const ERR_NO_PERMISSION_GOAL: &str = "You don't have permission to access this goal";
pub const ERR_BLANK_TITLE: &str = "Title cannot be blank";
pub const ERR_INVALID_AMOUNT: &str = "Deposit amount must be greater than zero";

// Validation errors
pub const ERR_INVALID_USERNAME_FORMAT: &str =
    "Username can only contain letters, numbers, underscores, and hyphens";
pub const ERR_INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const ERR_INVALID_QUERY: &str = "Invalid query parameters";
