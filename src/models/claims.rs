//! JWT Claims model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::{CODE_INVALID_TOKEN, ERR_INVALID_TOKEN};
use crate::errors::ApiError;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

impl Claims {
    /// Parse the subject back into the user's ObjectId.
    pub fn user_id(&self) -> Result<ObjectId, ApiError> {
        ObjectId::parse_str(&self.sub)
            .map_err(|_| ApiError::unauthorized(CODE_INVALID_TOKEN, ERR_INVALID_TOKEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "saver@example.com".to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = ObjectId::new();
        let claims = claims_for(&id.to_hex());
        assert_eq!(claims.user_id().unwrap(), id);
    }

    #[test]
    fn test_malformed_subject_is_unauthorized() {
        let err = claims_for("42").user_id().unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
    }
}
