//! Savings goal document and its balance rules.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CreateGoalRequest, UpdateGoalRequest};

/// Goal document stored in MongoDB.
///
/// `completed` always mirrors `balance >= target_value`. In-process changes go
/// through [`Goal::refresh_completion`]; stored changes re-derive it in the
/// update pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Goal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_value: f64,
    #[serde(default)]
    pub balance: f64,
    pub user_id: ObjectId,
    pub active: bool,
    pub completed: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl Goal {
    /// Build a new goal owned by `user_id`. The owner never comes from the request body.
    pub fn new(user_id: ObjectId, req: CreateGoalRequest) -> Self {
        let now = DateTime::now();
        let mut goal = Self {
            id: None,
            title: req.title.trim().to_string(),
            description: req.description.unwrap_or_default(),
            target_value: req.target_value,
            balance: req.balance.unwrap_or(0.0),
            user_id,
            active: true,
            completed: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        goal.refresh_completion();
        goal
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.user_id == *user_id
    }

    pub fn refresh_completion(&mut self) {
        self.completed = self.balance >= self.target_value;
    }

    /// Apply the fields present in an update request. Balance and owner are
    /// not touched here.
    pub fn apply_update(&mut self, req: UpdateGoalRequest) {
        if let Some(title) = req.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(target_value) = req.target_value {
            self.target_value = target_value;
        }
        if let Some(active) = req.active {
            self.active = active;
        }
        self.refresh_completion();
        self.updated_at = DateTime::now();
    }
}

/// Optional filters for listing a user's goals.
#[derive(Debug, Clone, Default)]
pub struct GoalListFilter {
    pub completed: Option<bool>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl GoalListFilter {
    /// Trimmed, non-empty title search term.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Dashboard totals over a user's goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GoalSummary {
    /// Number of goals that have not been deleted
    #[serde(default)]
    #[schema(example = 3)]
    pub total_goals: i64,
    /// Number of goals whose balance reached the target
    #[serde(default)]
    #[schema(example = 1)]
    pub completed_goals: i64,
    /// Sum of all balances
    #[serde(default)]
    #[schema(example = 4250.0)]
    pub total_balance: f64,
    /// Sum of all target values
    #[serde(default)]
    #[schema(example = 15000.0)]
    pub total_target: f64,
}
