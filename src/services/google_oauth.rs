//! Google OAuth 2.0 sign-in.
//!
//! Authorization Code flow with PKCE:
//!
//! 1. [`GoogleOAuthService::authorization_request`] builds the Google consent
//!    URL with a random CSRF state and a PKCE challenge. The handler keeps the
//!    state and verifier in HttpOnly cookies.
//! 2. [`GoogleOAuthService::fetch_user`] exchanges the returned code (with the
//!    verifier) for an access token and reads the profile from the userinfo
//!    endpoint.

use log::{debug, error};
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::config::Config;
use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_OAUTH_FAILED, ERR_OAUTH_EXCHANGE_FAILED, ERR_OAUTH_USERINFO_FAILED,
};
use crate::errors::ApiError;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Profile returned by the Google userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    /// Google only vouches for the address when this is set.
    #[serde(default)]
    pub verified_email: bool,
    pub name: Option<String>,
}

impl GoogleUserInfo {
    /// Google name, falling back to the local part of the email.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Consent URL plus the secrets the callback needs to finish the flow.
#[derive(Debug)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
    pub pkce_verifier: String,
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

pub struct GoogleOAuthService {
    client: ConfiguredClient,
    http: reqwest::Client,
}

fn config_error(err: impl ToString) -> ApiError {
    ApiError::internal(CODE_INTERNAL_ERROR, err.to_string())
}

impl GoogleOAuthService {
    pub fn new(client_id: &str, client_secret: &str, redirect_url: &str) -> Result<Self, ApiError> {
        let client = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_auth_uri(AuthUrl::new(GOOGLE_AUTH_URL.to_string()).map_err(config_error)?)
            .set_token_uri(TokenUrl::new(GOOGLE_TOKEN_URL.to_string()).map_err(config_error)?)
            .set_redirect_uri(RedirectUrl::new(redirect_url.to_string()).map_err(config_error)?);

        // No redirects on the token endpoint.
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(config_error)?;

        Ok(Self { client, http })
    }

    /// Build the service when Google credentials are configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>, ApiError> {
        config
            .google_credentials()
            .map(|(id, secret)| Self::new(id, secret, &config.google_redirect_url))
            .transpose()
    }

    /// Consent URL requesting the email and profile scopes.
    pub fn authorization_request(&self) -> AuthorizationRequest {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(
                "https://www.googleapis.com/auth/userinfo.email".to_string(),
            ))
            .add_scope(Scope::new(
                "https://www.googleapis.com/auth/userinfo.profile".to_string(),
            ))
            .set_pkce_challenge(pkce_challenge)
            .url();

        AuthorizationRequest {
            url: auth_url.to_string(),
            state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        }
    }

    /// Exchange an authorization code for a token and read the Google profile.
    pub async fn fetch_user(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> Result<GoogleUserInfo, ApiError> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| {
                error!("Google token exchange failed: {}", e);
                ApiError::internal(CODE_OAUTH_FAILED, ERR_OAUTH_EXCHANGE_FAILED)
            })?;

        let userinfo_failed = |e: reqwest::Error| {
            error!("Google userinfo request failed: {}", e);
            ApiError::internal(CODE_OAUTH_FAILED, ERR_OAUTH_USERINFO_FAILED)
        };

        let profile: GoogleUserInfo = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(userinfo_failed)?
            .json()
            .await
            .map_err(userinfo_failed)?;

        debug!("Fetched Google profile {}", profile.id);
        Ok(profile)
    }
}
