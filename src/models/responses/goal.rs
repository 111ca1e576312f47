//! Goal response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{to_utc, Goal};

/// Goal data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct GoalResponse {
    #[schema(example = "65f1c0ffee0ddba11ca7f00d")]
    pub id: String,
    #[schema(example = "Summer vacation")]
    pub title: String,
    pub description: String,
    #[schema(example = 10000.0)]
    pub target_value: f64,
    #[schema(example = 2500.0)]
    pub balance: f64,
    /// Owner of the goal
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub user_id: String,
    pub active: bool,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: goal.title,
            description: goal.description,
            target_value: goal.target_value,
            balance: goal.balance,
            user_id: goal.user_id.to_hex(),
            active: goal.active,
            completed: goal.completed,
            created_at: to_utc(goal.created_at),
            updated_at: to_utc(goal.updated_at),
        }
    }
}
