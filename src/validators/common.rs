//! Common validation utilities and helpers.

use log::warn;
use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

use crate::constants::{
    CODE_INVALID_AMOUNT, CODE_INVALID_GOAL_ID, ERR_INVALID_AMOUNT, ERR_INVALID_GOAL_ID,
};
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Messages are sorted by field name so responses are stable.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut fields: Vec<_> = e.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let errors: Vec<String> = fields
        .into_iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    warn!("Validation failed: {:?}", errors);
    ApiError::ValidationError { errors }
}

/// Parse a goal id from the path.
pub fn parse_goal_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id)
        .map_err(|_| ApiError::bad_request(CODE_INVALID_GOAL_ID, ERR_INVALID_GOAL_ID))
}

/// Reject deposits that are not strictly positive finite numbers.
pub fn validate_deposit_amount(amount: f64) -> Result<(), ApiError> {
    if amount.is_finite() && amount > 0.0 {
        return Ok(());
    }
    Err(ApiError::bad_request(CODE_INVALID_AMOUNT, ERR_INVALID_AMOUNT))
}
