//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_GOALS: &str = "goals";
