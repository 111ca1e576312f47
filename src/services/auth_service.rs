//! Authentication service for signup, login, token generation, and password utilities.

use std::sync::Arc;

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, info, warn};

use crate::config::CONFIG;
use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_INTERNAL_ERROR, CODE_INVALID_CREDENTIALS, CODE_OAUTH_FAILED,
    CODE_USERNAME_EXISTS, ERR_EMAIL_EXISTS, ERR_GOOGLE_EMAIL_UNVERIFIED, ERR_INVALID_CREDENTIALS,
    ERR_USERNAME_EXISTS,
};
use crate::errors::ApiError;
use crate::models::{Claims, LoginRequest, SignupRequest, User};
use crate::repositories::UserRepositoryTrait;
use crate::services::GoogleUserInfo;
use crate::utils::{mask_email, mask_username};

/// Service for authentication operations.
pub struct AuthService {
    users: Arc<dyn UserRepositoryTrait>,
    hash_cost: u32,
}

impl AuthService {
    /// Create a new AuthService hashing with the configured bcrypt cost.
    pub fn new(users: Arc<dyn UserRepositoryTrait>) -> Self {
        Self::with_hash_cost(users, CONFIG.bcrypt_cost)
    }

    pub fn with_hash_cost(users: Arc<dyn UserRepositoryTrait>, hash_cost: u32) -> Self {
        Self { users, hash_cost }
    }

    /// Register a local account. Email and username must both be unused.
    pub async fn signup(&self, req: SignupRequest) -> Result<User, ApiError> {
        if self.users.find_by_email(&req.email).await?.is_some() {
            warn!("Signup rejected: email {} already registered", mask_email(&req.email));
            return Err(ApiError::conflict(CODE_EMAIL_EXISTS, ERR_EMAIL_EXISTS));
        }

        if self.users.find_by_username(&req.username).await?.is_some() {
            warn!(
                "Signup rejected: username {} already taken",
                mask_username(&req.username)
            );
            return Err(ApiError::conflict(CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS));
        }

        let password_hash = hash(&req.password, self.hash_cost)?;
        let user = User::local(req.username, &req.email, password_hash);
        let id = self.users.insert(&user).await?;

        info!("User registered: {}", mask_email(&user.email));
        Ok(User {
            id: Some(id),
            ..user
        })
    }

    /// Authenticate a user and return a JWT token.
    ///
    /// Unknown emails, wrong passwords and Google-only accounts all fail with
    /// the same message so the response does not reveal which accounts exist.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), ApiError> {
        let invalid = || ApiError::unauthorized(CODE_INVALID_CREDENTIALS, ERR_INVALID_CREDENTIALS);

        let user = self.users.find_by_email(&req.email).await?.ok_or_else(|| {
            warn!("Login failed for {}: unknown email", mask_email(&req.email));
            invalid()
        })?;

        let Some(password_hash) = user.password_hash.as_deref() else {
            warn!("Login failed for {}: no local password", mask_email(&req.email));
            return Err(invalid());
        };

        if !verify_password(&req.password, password_hash)? {
            warn!("Login failed for {}: wrong password", mask_email(&req.email));
            return Err(invalid());
        }

        let user_id = user
            .id
            .ok_or_else(|| ApiError::internal(CODE_INTERNAL_ERROR, "Stored user has no id"))?;
        self.users.update_last_login(user_id).await?;

        let token = generate_token(&user)?;
        info!("User {} logged in", mask_email(&user.email));
        Ok((user, token))
    }

    /// Find or create the account behind a Google profile and issue a token.
    ///
    /// A repeat sign-in refreshes the stored name and Google id. Profiles with
    /// an unverified email are refused.
    pub async fn login_with_google(
        &self,
        profile: GoogleUserInfo,
    ) -> Result<(User, String), ApiError> {
        if !profile.verified_email {
            warn!(
                "Google sign-in refused for {}: email not verified",
                mask_email(&profile.email)
            );
            return Err(ApiError::unauthorized(
                CODE_OAUTH_FAILED,
                ERR_GOOGLE_EMAIL_UNVERIFIED,
            ));
        }

        let name = profile.display_name();

        let user = match self.users.find_by_email(&profile.email).await? {
            Some(mut existing) => {
                let user_id = existing.id.ok_or_else(|| {
                    ApiError::internal(CODE_INTERNAL_ERROR, "Stored user has no id")
                })?;
                self.users
                    .update_google_profile(user_id, &name, &profile.id)
                    .await?;
                existing.name = name;
                existing.google_id = Some(profile.id);
                debug!("Refreshed Google profile for {}", mask_email(&existing.email));
                existing
            }
            None => {
                let user = User::from_google(&name, &profile.email, &profile.id);
                let id = self.users.insert(&user).await?;
                info!("User created from Google sign-in: {}", mask_email(&user.email));
                User {
                    id: Some(id),
                    ..user
                }
            }
        };

        let token = generate_token(&user)?;
        Ok((user, token))
    }
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a JWT token for a user.
pub fn generate_token(user: &User) -> Result<String, ApiError> {
    let user_id = user
        .id
        .ok_or_else(|| ApiError::internal(CODE_INTERNAL_ERROR, "Cannot issue token for unsaved user"))?;

    let now = Utc::now().timestamp().max(0) as usize;
    let lifetime = CONFIG.jwt_expiration_hours.saturating_mul(3600) as usize;
    let exp = now.saturating_add(lifetime);

    let claims = Claims {
        sub: user_id.to_hex(),
        email: user.email.clone(),
        exp,
        iat: now,
    };

    debug!("Generated token for user {}", user_id);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::internal(CODE_INTERNAL_ERROR, e.to_string()))?;

    Ok(token)
}

/// Decode and validate a JWT token (HS256 signature and expiry).
pub fn decode_token(token: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
