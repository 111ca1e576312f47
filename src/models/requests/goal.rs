//! Goal request models.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validators::validate_goal_title;

/// Request payload for creating a goal
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    /// Goal title (1-100 characters)
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "Title must be between 1 and 100 characters"
        ),
        custom(function = "validate_goal_title")
    )]
    #[schema(example = "Summer vacation")]
    pub title: String,
    /// Free-form description (max 500 characters)
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[schema(example = "Two weeks at the coast")]
    pub description: Option<String>,
    /// Amount to reach
    #[validate(range(exclusive_min = 0.0, message = "Target value must be greater than zero"))]
    #[schema(example = 10000.0)]
    pub target_value: f64,
    /// Starting balance (defaults to 0)
    #[validate(range(min = 0.0, message = "Balance cannot be negative"))]
    #[schema(example = 0.0)]
    pub balance: Option<f64>,
}

/// Request payload for updating a goal. Only the fields sent are changed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalRequest {
    /// New title (1-100 characters)
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "Title must be between 1 and 100 characters"
        ),
        custom(function = "validate_goal_title")
    )]
    #[schema(example = "Winter vacation")]
    pub title: Option<String>,
    /// New description (max 500 characters)
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    /// New target value
    #[validate(range(exclusive_min = 0.0, message = "Target value must be greater than zero"))]
    #[schema(example = 12000.0)]
    pub target_value: Option<f64>,
    /// Whether the goal is still being pursued
    #[schema(example = true)]
    pub active: Option<bool>,
}

/// Request payload for depositing money into a goal
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DepositRequest {
    /// Amount to add to the balance; must be positive
    #[validate(range(exclusive_min = 0.0, message = "Deposit amount must be greater than zero"))]
    #[schema(example = 250.0)]
    pub amount: f64,
}

/// Query parameters for listing goals
#[derive(Debug, Deserialize, IntoParams)]
pub struct GoalListQuery {
    /// Page number (default: 1)
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 100)
    pub per_page: Option<u64>,
    /// Filter by completion
    pub completed: Option<bool>,
    /// Filter by active flag
    pub active: Option<bool>,
    /// Case-insensitive search on the title
    pub search: Option<String>,
}
