//! Goal-related custom validators.

use validator::ValidationError;

use crate::constants::ERR_BLANK_TITLE;

/// Titles are stored trimmed, so whitespace alone does not count as a title.
pub fn validate_goal_title(title: &str) -> Result<(), ValidationError> {
    if !title.trim().is_empty() {
        return Ok(());
    }
    let mut error = ValidationError::new("blank_title");
    error.message = Some(ERR_BLANK_TITLE.into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateGoalRequest, UpdateGoalRequest};
    use validator::Validate;

    #[test]
    fn test_goal_title_format() {
        assert!(validate_goal_title("Bike").is_ok());
        assert!(validate_goal_title("  Bike  ").is_ok());
        assert!(validate_goal_title("   ").is_err());
        assert!(validate_goal_title("\t\n").is_err());
    }

    #[test]
    fn test_whitespace_title_rejected_on_create_and_update() {
        let create = CreateGoalRequest {
            title: "   ".to_string(),
            description: None,
            target_value: 100.0,
            balance: None,
        };
        let errors = create.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let update = UpdateGoalRequest {
            title: Some("   ".to_string()),
            description: None,
            target_value: None,
            active: None,
        };
        assert!(update.validate().is_err());

        let untouched = UpdateGoalRequest {
            title: None,
            description: None,
            target_value: None,
            active: None,
        };
        assert!(untouched.validate().is_ok());
    }
}
