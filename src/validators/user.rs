//! User-related custom validators.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::constants::ERR_INVALID_USERNAME_FORMAT;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Custom validator for the username field.
/// Only letters, numbers, underscores and hyphens are allowed.
pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_username");
    error.message = Some(ERR_INVALID_USERNAME_FORMAT.into());
    Err(error)
}
