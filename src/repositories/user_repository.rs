//! User repository for all MongoDB operations related to users.

use async_trait::async_trait;
use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_INTERNAL_ERROR, CODE_USERNAME_EXISTS, COLLECTION_USERS,
    ERR_EMAIL_EXISTS, ERR_USERNAME_EXISTS,
};
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepositoryTrait;

/// MongoDB-backed user repository.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create database indexes for the users collection.
    ///
    /// - Unique index on `email`
    /// - Unique sparse index on `username` (Google-only accounts have none)
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(IndexOptions::builder().unique(true).sparse(true).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("User indexes created successfully");
        Ok(())
    }
}

/// MongoDB's duplicate key error code.
const DUPLICATE_KEY: i32 = 11000;

/// Map a unique-index violation to the same 409 the signup checks return.
/// The server names the violated index (`email_1` / `username_1`) in the message.
fn duplicate_key_conflict(message: &str) -> ApiError {
    if message.contains("index: username") {
        ApiError::conflict(CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS)
    } else {
        ApiError::conflict(CODE_EMAIL_EXISTS, ERR_EMAIL_EXISTS)
    }
}

fn insert_error(err: MongoError) -> ApiError {
    if let ErrorKind::Write(WriteFailure::WriteError(write)) = err.kind.as_ref() {
        if write.code == DUPLICATE_KEY {
            warn!("Insert hit a unique index: {}", write.message);
            return duplicate_key_conflict(&write.message);
        }
    }
    err.into()
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .map_err(insert_error)?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal(CODE_INTERNAL_ERROR, "Inserted user has no ObjectId"))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by username");
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn update_google_profile(
        &self,
        id: ObjectId,
        name: &str,
        google_id: &str,
    ) -> Result<(), ApiError> {
        let now = DateTime::now();
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "name": name,
                        "google_id": google_id,
                        "last_login": now,
                        "updated_at": now
                    }
                },
            )
            .await?;
        Ok(())
    }

    async fn update_last_login(&self, id: ObjectId) -> Result<(), ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_login": DateTime::now() } },
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_maps_to_conflict_per_index() {
        let username = duplicate_key_conflict(
            "E11000 duplicate key error collection: goals.users index: username_1 dup key: { username: \"saver\" }",
        );
        assert!(matches!(username, ApiError::Conflict { .. }));
        assert_eq!(username.code(), CODE_USERNAME_EXISTS);

        let email = duplicate_key_conflict(
            "E11000 duplicate key error collection: goals.users index: email_1 dup key: { email: \"saver@example.com\" }",
        );
        assert_eq!(email.code(), CODE_EMAIL_EXISTS);

        let email_named_username = duplicate_key_conflict(
            "E11000 duplicate key error collection: goals.users index: email_1 dup key: { email: \"username@example.com\" }",
        );
        assert_eq!(email_named_username.code(), CODE_EMAIL_EXISTS);
    }

    #[test]
    fn test_other_driver_errors_stay_internal() {
        let err = insert_error(MongoError::custom("connection reset"));
        assert_eq!(err.code(), CODE_INTERNAL_ERROR);
    }
}
