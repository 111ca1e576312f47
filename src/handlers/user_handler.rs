//! User profile handler.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

use crate::constants::MSG_USER_PROFILE_RETRIEVED;
use crate::errors::ApiError;
use crate::middleware::require_auth;
use crate::models::{ApiResponse, UserResponse};
use crate::services::UserService;

/// Get the currently authenticated user's profile
#[utoipa::path(
    get,
    path = "/user/profile",
    tag = "Users",
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    let user = user_service.get_profile(&claims).await?;
    let user_response: UserResponse = user.into();

    info!("Fetched profile for user: {}", claims.sub);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_USER_PROFILE_RETRIEVED,
        user_response,
    )))
}
