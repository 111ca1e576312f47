//! Goal service: creation, owner-scoped reads and writes, deposits and the
//! dashboard summary.
//!
//! Every operation on an existing goal goes through [`GoalService::owned_goal`],
//! which turns a missing or soft-deleted goal into 404 and someone else's goal
//! into 403.

use std::sync::Arc;

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::constants::{
    CODE_FORBIDDEN, CODE_GOAL_NOT_FOUND, ERR_GOAL_NOT_FOUND, ERR_NO_PERMISSION_GOAL,
};
use crate::errors::ApiError;
use crate::models::{
    CreateGoalRequest, Goal, GoalListFilter, GoalResponse, GoalSummary, UpdateGoalRequest,
};
use crate::repositories::GoalRepositoryTrait;
use crate::validators::validate_deposit_amount;

pub struct GoalService {
    goals: Arc<dyn GoalRepositoryTrait>,
}

fn goal_not_found() -> ApiError {
    ApiError::not_found(CODE_GOAL_NOT_FOUND, ERR_GOAL_NOT_FOUND)
}

impl GoalService {
    pub fn new(goals: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goals }
    }

    /// Fetch a live goal and check that `user_id` owns it.
    async fn owned_goal(&self, user_id: ObjectId, goal_id: ObjectId) -> Result<Goal, ApiError> {
        let goal = self.goals.find_by_id(goal_id).await?.ok_or_else(|| {
            debug!("Goal not found: {}", goal_id);
            goal_not_found()
        })?;

        if !goal.is_owned_by(&user_id) {
            warn!(
                "User {} attempted to access goal {} owned by {}",
                user_id, goal_id, goal.user_id
            );
            return Err(ApiError::forbidden(CODE_FORBIDDEN, ERR_NO_PERMISSION_GOAL));
        }

        Ok(goal)
    }

    pub async fn create_goal(
        &self,
        user_id: ObjectId,
        req: CreateGoalRequest,
    ) -> Result<Goal, ApiError> {
        let goal = Goal::new(user_id, req);
        let id = self.goals.insert(&goal).await?;
        info!("User {} created goal {}", user_id, id);

        Ok(Goal {
            id: Some(id),
            ..goal
        })
    }

    /// One page of the caller's goals plus the total count for the filter.
    pub async fn list_goals(
        &self,
        user_id: ObjectId,
        filter: GoalListFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<GoalResponse>, u64), ApiError> {
        let total = self.goals.count_by_owner(user_id, &filter).await?;
        let skip = page.saturating_sub(1).saturating_mul(per_page);

        let goals = self
            .goals
            .find_by_owner(user_id, &filter, skip, per_page as i64)
            .await?;
        debug!("Listed {} of {} goals for user {}", goals.len(), total, user_id);

        Ok((goals.into_iter().map(GoalResponse::from).collect(), total))
    }

    pub async fn get_goal(&self, user_id: ObjectId, goal_id: ObjectId) -> Result<Goal, ApiError> {
        self.owned_goal(user_id, goal_id).await
    }

    pub async fn update_goal(
        &self,
        user_id: ObjectId,
        goal_id: ObjectId,
        req: UpdateGoalRequest,
    ) -> Result<Goal, ApiError> {
        let mut goal = self.owned_goal(user_id, goal_id).await?;
        goal.apply_update(req);

        let updated = self.goals.update(&goal).await?.ok_or_else(goal_not_found)?;
        info!("User {} updated goal {}", user_id, goal_id);
        Ok(updated)
    }

    pub async fn delete_goal(&self, user_id: ObjectId, goal_id: ObjectId) -> Result<(), ApiError> {
        self.owned_goal(user_id, goal_id).await?;

        if !self.goals.soft_delete(goal_id).await? {
            return Err(goal_not_found());
        }
        info!("User {} deleted goal {}", user_id, goal_id);
        Ok(())
    }

    /// Add a positive amount to the goal's balance; completes the goal once
    /// the balance reaches the target.
    pub async fn deposit(
        &self,
        user_id: ObjectId,
        goal_id: ObjectId,
        amount: f64,
    ) -> Result<Goal, ApiError> {
        validate_deposit_amount(amount)?;
        let before = self.owned_goal(user_id, goal_id).await?;

        let goal = self
            .goals
            .deposit(goal_id, amount)
            .await?
            .ok_or_else(goal_not_found)?;

        info!(
            "Deposit of {:.2} into goal {}: balance {:.2} of {:.2}",
            amount, goal_id, goal.balance, goal.target_value
        );
        if goal.completed && !before.completed {
            info!("Goal {} completed", goal_id);
        }
        Ok(goal)
    }

    pub async fn summary(&self, user_id: ObjectId) -> Result<GoalSummary, ApiError> {
        self.goals.summary_for_owner(user_id).await
    }
}
