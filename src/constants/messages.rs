//! Success message constants used throughout the application.

// Authentication messages
pub const MSG_USER_REGISTERED: &str = "User registered successfully";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful";
pub const MSG_GOOGLE_LOGIN_SUCCESS: &str = "Google authentication successful";

// User messages
pub const MSG_USER_PROFILE_RETRIEVED: &str = "User profile retrieved";

// Goal messages
pub const MSG_GOAL_CREATED: &str = "Goal created successfully";
pub const MSG_GOAL_FOUND: &str = "Goal found";
pub const MSG_GOAL_UPDATED: &str = "Goal updated successfully";
pub const MSG_GOAL_DELETED: &str = "Goal deleted successfully";
pub const MSG_DEPOSIT_SUCCESS: &str = "Deposit registered successfully";
pub const MSG_GOAL_SUMMARY: &str = "Goal summary";

// General messages
pub const MSG_WELCOME: &str = "Welcome to the savings goals API";
