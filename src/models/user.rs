use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// Accounts created through signup carry a `username` and a `password_hash`;
/// accounts created through Google sign-in carry a `google_id` instead and can
/// only log in through Google until a password is set.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime>,
}

impl User {
    /// New local account from signup data. `password_hash` must already be hashed.
    pub fn local(username: String, email: &str, password_hash: String) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name: username.clone(),
            username: Some(username),
            email: email.to_lowercase(),
            password_hash: Some(password_hash),
            google_id: None,
            created_at: now,
            updated_at: now,
            last_login: None,
        }
    }

    /// New account from a Google profile; it has no local password.
    pub fn from_google(name: &str, email: &str, google_id: &str) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name: name.to_string(),
            username: None,
            email: email.to_lowercase(),
            password_hash: None,
            google_id: Some(google_id.to_string()),
            created_at: now,
            updated_at: now,
            last_login: Some(now),
        }
    }
}
