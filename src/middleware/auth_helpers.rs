//! Authentication helper functions for handlers.

use actix_web::HttpRequest;
use log::warn;
use mongodb::bson::oid::ObjectId;

use crate::constants::{CODE_INVALID_TOKEN, ERR_AUTH_REQUIRED};
use crate::errors::ApiError;
use crate::models::Claims;

use super::RequestExt;

/// Extract claims from request or return Unauthorized error.
///
/// Use this at the start of any handler that requires authentication.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// ```
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::unauthorized(CODE_INVALID_TOKEN, ERR_AUTH_REQUIRED)
    })
}

/// Authenticated user's id, parsed from the token subject.
pub fn require_user_id(req: &HttpRequest) -> Result<ObjectId, ApiError> {
    require_auth(req)?.user_id()
}
