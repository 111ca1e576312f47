//! Goal repository for all MongoDB operations related to goals.
//!
//! Every query carries `deleted_at: null` so soft-deleted goals never leak
//! back out. Balance changes are expressed as update pipelines so the
//! `completed` flag is derived from the stored balance in the same write.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{self, doc, oid::ObjectId, DateTime, Document, Regex};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{CODE_INTERNAL_ERROR, COLLECTION_GOALS};
use crate::errors::ApiError;
use crate::models::{Goal, GoalListFilter, GoalSummary};
use crate::repositories::GoalRepositoryTrait;

/// MongoDB-backed goal repository.
pub struct GoalRepository {
    collection: Collection<Goal>,
}

impl GoalRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_GOALS),
        }
    }

    /// Create the compound index used by the per-owner queries.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for goals collection...");

        let index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "deleted_at": 1, "created_at": -1 })
            .build();

        self.collection.create_index(index).await?;
        info!("Goal indexes created successfully");
        Ok(())
    }
}

/// Filter document for a user's live goals.
fn owner_filter(user_id: ObjectId, filter: &GoalListFilter) -> Document {
    let mut query = doc! { "user_id": user_id, "deleted_at": null };

    if let Some(completed) = filter.completed {
        query.insert("completed", completed);
    }

    if let Some(active) = filter.active {
        query.insert("active", active);
    }

    if let Some(search) = filter.search_term() {
        query.insert(
            "title",
            doc! {
                "$regex": Regex {
                    pattern: regex::escape(search),
                    options: "i".to_string(),
                }
            },
        );
    }

    query
}

/// Pipeline stage that re-derives `completed` from the stored fields.
fn completion_stage() -> Document {
    doc! { "$set": { "completed": { "$gte": ["$balance", "$target_value"] } } }
}

/// Update pipeline for the editable fields. The balance is left alone.
fn update_pipeline(goal: &Goal, now: DateTime) -> Vec<Document> {
    vec![
        doc! {
            "$set": {
                "title": goal.title.as_str(),
                "description": goal.description.as_str(),
                "target_value": goal.target_value,
                "active": goal.active,
                "updated_at": now
            }
        },
        completion_stage(),
    ]
}

/// Update pipeline adding `amount` to the stored balance.
fn deposit_pipeline(amount: f64, now: DateTime) -> Vec<Document> {
    vec![
        doc! {
            "$set": {
                "balance": { "$add": ["$balance", amount] },
                "updated_at": now
            }
        },
        completion_stage(),
    ]
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn insert(&self, goal: &Goal) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(goal).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal(CODE_INTERNAL_ERROR, "Inserted goal has no ObjectId"))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Goal>, ApiError> {
        debug!("Repository: Finding goal by ID: {}", id);
        Ok(self
            .collection
            .find_one(doc! { "_id": id, "deleted_at": null })
            .await?)
    }

    async fn find_by_owner(
        &self,
        user_id: ObjectId,
        filter: &GoalListFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Goal>, ApiError> {
        let query = owner_filter(user_id, filter);
        debug!("Repository: Finding goals with filter: {:?}", query);

        let cursor = self
            .collection
            .find(query)
            .skip(skip)
            .limit(limit)
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count_by_owner(
        &self,
        user_id: ObjectId,
        filter: &GoalListFilter,
    ) -> Result<u64, ApiError> {
        Ok(self
            .collection
            .count_documents(owner_filter(user_id, filter))
            .await?)
    }

    async fn update(&self, goal: &Goal) -> Result<Option<Goal>, ApiError> {
        let id = goal
            .id
            .ok_or_else(|| ApiError::internal(CODE_INTERNAL_ERROR, "Cannot update unsaved goal"))?;

        Ok(self
            .collection
            .find_one_and_update(
                doc! { "_id": id, "deleted_at": null },
                update_pipeline(goal, DateTime::now()),
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn deposit(&self, id: ObjectId, amount: f64) -> Result<Option<Goal>, ApiError> {
        Ok(self
            .collection
            .find_one_and_update(
                doc! { "_id": id, "deleted_at": null },
                deposit_pipeline(amount, DateTime::now()),
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn soft_delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let now = DateTime::now();
        let result = self
            .collection
            .update_one(
                doc! { "_id": id, "deleted_at": null },
                doc! { "$set": { "deleted_at": now, "updated_at": now } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn summary_for_owner(&self, user_id: ObjectId) -> Result<GoalSummary, ApiError> {
        let pipeline = vec![
            doc! { "$match": { "user_id": user_id, "deleted_at": null } },
            doc! {
                "$group": {
                    "_id": null,
                    "total_goals": { "$sum": 1 },
                    "completed_goals": { "$sum": { "$cond": ["$completed", 1, 0] } },
                    "total_balance": { "$sum": "$balance" },
                    "total_target": { "$sum": "$target_value" }
                }
            },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        match cursor.try_next().await? {
            Some(totals) => Ok(bson::from_document(totals)?),
            None => Ok(GoalSummary::default()),
        }
    }
}
