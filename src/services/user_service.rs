//! User service for profile lookups.

use std::sync::Arc;

use log::{debug, warn};

use crate::constants::{CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{Claims, User};
use crate::repositories::UserRepositoryTrait;

pub struct UserService {
    users: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { users }
    }

    /// Load the account behind an authenticated request.
    pub async fn get_profile(&self, claims: &Claims) -> Result<User, ApiError> {
        let user_id = claims.user_id()?;
        debug!("Fetching profile for user: {}", user_id);

        self.users.find_by_id(user_id).await?.ok_or_else(|| {
            warn!("Profile requested for missing user: {}", user_id);
            ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;
    use mongodb::bson::oid::ObjectId;

    fn claims_for(id: ObjectId) -> Claims {
        Claims {
            sub: id.to_hex(),
            email: "saver@example.com".to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[actix_web::test]
    async fn test_get_profile() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let user = User::local("saver".to_string(), "saver@example.com", "hash".to_string());
        let id = repo.insert(&user).await.unwrap();
        let service = UserService::new(repo);

        let profile = service.get_profile(&claims_for(id)).await.unwrap();
        assert_eq!(profile.id, Some(id));
        assert_eq!(profile.email, "saver@example.com");
    }

    #[actix_web::test]
    async fn test_get_profile_missing_user() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        let err = service
            .get_profile(&claims_for(ObjectId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_USER_NOT_FOUND);
    }
}
