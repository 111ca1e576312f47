//! Repository layer for database operations.
//!
//! Services depend on the traits below rather than on MongoDB directly, so the
//! business rules can be exercised against the in-memory implementations in
//! tests.

pub mod goal_repository;
#[cfg(test)]
pub mod memory;
pub mod user_repository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{Goal, GoalListFilter, GoalSummary, User};

pub use goal_repository::GoalRepository;
pub use user_repository::UserRepository;

/// Storage operations on user accounts.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn insert(&self, user: &User) -> Result<ObjectId, ApiError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError>;
    /// Lookup is case-insensitive; emails are stored lower-cased.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;
    /// Refresh the name and Google id of an existing account after a Google sign-in.
    async fn update_google_profile(
        &self,
        id: ObjectId,
        name: &str,
        google_id: &str,
    ) -> Result<(), ApiError>;
    async fn update_last_login(&self, id: ObjectId) -> Result<(), ApiError>;
}

/// Storage operations on goals. Soft-deleted goals are invisible to every read.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn insert(&self, goal: &Goal) -> Result<ObjectId, ApiError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Goal>, ApiError>;
    async fn find_by_owner(
        &self,
        user_id: ObjectId,
        filter: &GoalListFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Goal>, ApiError>;
    async fn count_by_owner(
        &self,
        user_id: ObjectId,
        filter: &GoalListFilter,
    ) -> Result<u64, ApiError>;
    /// Persist title, description, target and active flag, re-deriving
    /// `completed` from the stored balance. Returns the stored goal, or `None`
    /// if it no longer exists.
    async fn update(&self, goal: &Goal) -> Result<Option<Goal>, ApiError>;
    /// Atomically add `amount` to the balance and re-derive `completed`.
    async fn deposit(&self, id: ObjectId, amount: f64) -> Result<Option<Goal>, ApiError>;
    /// Mark the goal deleted. Returns `false` if it was missing or already deleted.
    async fn soft_delete(&self, id: ObjectId) -> Result<bool, ApiError>;
    async fn summary_for_owner(&self, user_id: ObjectId) -> Result<GoalSummary, ApiError>;
}
