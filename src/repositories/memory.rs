//! In-memory repositories for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::errors::ApiError;
use crate::models::{Goal, GoalListFilter, GoalSummary, User};
use crate::repositories::{GoalRepositoryTrait, UserRepositoryTrait};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        self.users.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let email = email.to_lowercase();
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn update_google_profile(
        &self,
        id: ObjectId,
        name: &str,
        google_id: &str,
    ) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == Some(id)) {
            user.name = name.to_string();
            user.google_id = Some(google_id.to_string());
            user.last_login = Some(DateTime::now());
            user.updated_at = DateTime::now();
        }
        Ok(())
    }

    async fn update_last_login(&self, id: ObjectId) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == Some(id)) {
            user.last_login = Some(DateTime::now());
        }
        Ok(())
    }
}

fn is_live(goal: &Goal) -> bool {
    goal.deleted_at.is_none()
}

/// In-process version of the list query built by the MongoDB repository.
fn matches(filter: &GoalListFilter, goal: &Goal) -> bool {
    if filter.completed.is_some_and(|c| goal.completed != c) {
        return false;
    }
    if filter.active.is_some_and(|a| goal.active != a) {
        return false;
    }
    match filter.search_term() {
        Some(term) => goal.title.to_lowercase().contains(&term.to_lowercase()),
        None => true,
    }
}

fn summarize(goals: &[Goal]) -> GoalSummary {
    goals.iter().fold(GoalSummary::default(), |mut summary, goal| {
        summary.total_goals += 1;
        if goal.completed {
            summary.completed_goals += 1;
        }
        summary.total_balance += goal.balance;
        summary.total_target += goal.target_value;
        summary
    })
}

#[derive(Default)]
pub struct InMemoryGoalRepository {
    goals: Mutex<Vec<Goal>>,
}

impl InMemoryGoalRepository {
    fn live_for_owner(&self, user_id: ObjectId, filter: &GoalListFilter) -> Vec<Goal> {
        let goals = self.goals.lock().unwrap();
        goals
            .iter()
            .filter(|g| is_live(g) && g.is_owned_by(&user_id) && matches(filter, g))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    async fn insert(&self, goal: &Goal) -> Result<ObjectId, ApiError> {
        let id = ObjectId::new();
        let mut stored = goal.clone();
        stored.id = Some(id);
        self.goals.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Goal>, ApiError> {
        let goals = self.goals.lock().unwrap();
        Ok(goals
            .iter()
            .find(|g| g.id == Some(id) && is_live(g))
            .cloned())
    }

    async fn find_by_owner(
        &self,
        user_id: ObjectId,
        filter: &GoalListFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Goal>, ApiError> {
        let mut goals = self.live_for_owner(user_id, filter);
        // Newest first; insertion order stands in for created_at.
        goals.reverse();
        Ok(goals
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_by_owner(
        &self,
        user_id: ObjectId,
        filter: &GoalListFilter,
    ) -> Result<u64, ApiError> {
        Ok(self.live_for_owner(user_id, filter).len() as u64)
    }

    async fn update(&self, goal: &Goal) -> Result<Option<Goal>, ApiError> {
        let mut goals = self.goals.lock().unwrap();
        let Some(stored) = goals
            .iter_mut()
            .find(|g| g.id == goal.id && is_live(g))
        else {
            return Ok(None);
        };
        stored.title = goal.title.clone();
        stored.description = goal.description.clone();
        stored.target_value = goal.target_value;
        stored.active = goal.active;
        stored.updated_at = DateTime::now();
        stored.refresh_completion();
        Ok(Some(stored.clone()))
    }

    async fn deposit(&self, id: ObjectId, amount: f64) -> Result<Option<Goal>, ApiError> {
        let mut goals = self.goals.lock().unwrap();
        Ok(goals
            .iter_mut()
            .find(|g| g.id == Some(id) && is_live(g))
            .map(|goal| {
                goal.balance += amount;
                goal.updated_at = DateTime::now();
                goal.refresh_completion();
                goal.clone()
            }))
    }

    async fn soft_delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let mut goals = self.goals.lock().unwrap();
        match goals
            .iter_mut()
            .find(|g| g.id == Some(id) && is_live(g))
        {
            Some(goal) => {
                goal.deleted_at = Some(DateTime::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn summary_for_owner(&self, user_id: ObjectId) -> Result<GoalSummary, ApiError> {
        let goals = self.live_for_owner(user_id, &GoalListFilter::default());
        Ok(summarize(&goals))
    }
}
