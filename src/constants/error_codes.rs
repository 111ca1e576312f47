//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_AMOUNT: &str = "INVALID_AMOUNT";

// Authentication errors
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";
pub const CODE_INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
pub const CODE_INVALID_OAUTH_STATE: &str = "INVALID_OAUTH_STATE";
pub const CODE_OAUTH_FAILED: &str = "OAUTH_FAILED";
pub const CODE_OAUTH_NOT_CONFIGURED: &str = "OAUTH_NOT_CONFIGURED";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const CODE_USERNAME_EXISTS: &str = "USERNAME_EXISTS";

// Goal errors
pub const CODE_GOAL_NOT_FOUND: &str = "GOAL_NOT_FOUND";
pub const CODE_INVALID_GOAL_ID: &str = "INVALID_GOAL_ID";

// Authorization errors
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";

// Generic errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
