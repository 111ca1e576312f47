//! Google sign-in handlers.
//!
//! `/auth/google/login` redirects to Google's consent page and parks the CSRF
//! state and PKCE verifier in short-lived HttpOnly cookies. `/auth/google/callback`
//! checks the state, finishes the exchange and answers with our own JWT.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};

use crate::config::CONFIG;
use crate::constants::{
    CODE_BAD_REQUEST, CODE_INVALID_OAUTH_STATE, CODE_OAUTH_NOT_CONFIGURED,
    ERR_INVALID_OAUTH_STATE, ERR_MISSING_OAUTH_CODE, ERR_OAUTH_NOT_CONFIGURED,
    MSG_GOOGLE_LOGIN_SUCCESS,
};
use crate::errors::ApiError;
use crate::models::{AuthResponse, GoogleCallbackQuery};
use crate::services::{AuthService, GoogleOAuthService};
use crate::utils::mask_email;

pub const OAUTH_STATE_COOKIE: &str = "oauthstate";
pub const PKCE_VERIFIER_COOKIE: &str = "oauthverifier";

fn oauth_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(CONFIG.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(1))
        .finish()
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}

fn require_oauth(
    oauth: Option<web::Data<GoogleOAuthService>>,
) -> Result<web::Data<GoogleOAuthService>, ApiError> {
    oauth.ok_or_else(|| {
        warn!("Google sign-in requested but no Google credentials are configured");
        ApiError::internal(CODE_OAUTH_NOT_CONFIGURED, ERR_OAUTH_NOT_CONFIGURED)
    })
}

/// Start Google sign-in
#[utoipa::path(
    get,
    path = "/auth/google/login",
    tag = "Authentication",
    responses(
        (status = 307, description = "Redirect to the Google consent page"),
        (status = 500, description = "Google sign-in is not configured", body = crate::models::ErrorResponse)
    )
)]
pub async fn google_login(
    oauth: Option<web::Data<GoogleOAuthService>>,
) -> Result<HttpResponse, ApiError> {
    let oauth = require_oauth(oauth)?;
    let request = oauth.authorization_request();

    Ok(HttpResponse::TemporaryRedirect()
        .cookie(oauth_cookie(OAUTH_STATE_COOKIE, request.state))
        .cookie(oauth_cookie(PKCE_VERIFIER_COOKIE, request.pkce_verifier))
        .insert_header((LOCATION, request.url))
        .finish())
}

/// Finish Google sign-in and receive a JWT token
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = "Authentication",
    params(GoogleCallbackQuery),
    responses(
        (status = 200, description = "Google authentication successful", body = AuthResponse),
        (status = 400, description = "Authorization code missing", body = crate::models::ErrorResponse),
        (status = 401, description = "State does not match the login cookie", body = crate::models::ErrorResponse),
        (status = 500, description = "Google exchange failed or sign-in not configured", body = crate::models::ErrorResponse)
    )
)]
pub async fn google_callback(
    oauth: Option<web::Data<GoogleOAuthService>>,
    auth_service: web::Data<AuthService>,
    query: web::Query<GoogleCallbackQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let oauth = require_oauth(oauth)?;
    let query = query.into_inner();

    let expected_state = req.cookie(OAUTH_STATE_COOKIE);
    let state_matches = match (expected_state.as_ref(), query.state.as_deref()) {
        (Some(cookie), Some(state)) => !state.is_empty() && cookie.value() == state,
        _ => false,
    };
    if !state_matches {
        warn!("Google callback rejected: state mismatch");
        return Err(ApiError::unauthorized(
            CODE_INVALID_OAUTH_STATE,
            ERR_INVALID_OAUTH_STATE,
        ));
    }

    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::bad_request(CODE_BAD_REQUEST, ERR_MISSING_OAUTH_CODE))?;
    let verifier = req
        .cookie(PKCE_VERIFIER_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap_or_default();

    let profile = oauth.fetch_user(&code, &verifier).await?;
    let (user, token) = auth_service.login_with_google(profile).await?;
    info!("Google sign-in completed for {}", mask_email(&user.email));

    Ok(HttpResponse::Ok()
        .cookie(expired_cookie(OAUTH_STATE_COOKIE))
        .cookie(expired_cookie(PKCE_VERIFIER_COOKIE))
        .json(AuthResponse {
            success: true,
            message: MSG_GOOGLE_LOGIN_SUCCESS.to_string(),
            token,
            user: user.into(),
        }))
}
