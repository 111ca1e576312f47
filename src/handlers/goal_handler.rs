//! Goal handlers: CRUD, deposits and the dashboard summary.
//!
//! All routes sit behind the AuthMiddleware; the owner is always taken from
//! the token, never from the request body.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::constants::{
    MSG_DEPOSIT_SUCCESS, MSG_GOAL_CREATED, MSG_GOAL_DELETED, MSG_GOAL_FOUND, MSG_GOAL_SUMMARY,
    MSG_GOAL_UPDATED,
};
use crate::errors::ApiError;
use crate::middleware::require_user_id;
use crate::models::{
    normalize_paging, ApiResponse, CreateGoalRequest, DepositRequest, GoalListFilter,
    GoalListQuery, GoalResponse, PaginatedResponse, UpdateGoalRequest,
};
use crate::services::GoalService;
use crate::validators::{parse_goal_id, validation_errors_to_api_error};

/// Create a goal for the authenticated user
#[utoipa::path(
    post,
    path = "/api/goals",
    tag = "Goals",
    request_body = CreateGoalRequest,
    responses(
        (status = 201, description = "Goal created", body = GoalResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_goal(
    goal_service: web::Data<GoalService>,
    body: web::Json<CreateGoalRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let goal = goal_service.create_goal(user_id, body.into_inner()).await?;
    let goal_response: GoalResponse = goal.into();

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_GOAL_CREATED, goal_response)))
}

/// List the authenticated user's goals
#[utoipa::path(
    get,
    path = "/api/goals",
    tag = "Goals",
    params(GoalListQuery),
    responses(
        (status = 200, description = "Page of goals", body = crate::models::PaginatedGoalResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_goals(
    goal_service: web::Data<GoalService>,
    query: web::Query<GoalListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    let query = query.into_inner();
    let (page, per_page) = normalize_paging(query.page, query.per_page);

    let filter = GoalListFilter {
        completed: query.completed,
        active: query.active,
        search: query.search,
    };
    let (goals, total) = goal_service
        .list_goals(user_id, filter, page, per_page)
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(goals, total, page, per_page)))
}

/// Dashboard totals over the authenticated user's goals
#[utoipa::path(
    get,
    path = "/api/goals/info",
    tag = "Goals",
    responses(
        (status = 200, description = "Goal summary", body = crate::models::GoalSummary),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_goals_info(
    goal_service: web::Data<GoalService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    let summary = goal_service.summary(user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_GOAL_SUMMARY, summary)))
}

/// Get one of the authenticated user's goals
#[utoipa::path(
    get,
    path = "/api/goals/{id}",
    tag = "Goals",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal found", body = GoalResponse),
        (status = 400, description = "Invalid goal ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Goal belongs to another user", body = crate::models::ErrorResponse),
        (status = 404, description = "Goal not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_goal(
    goal_service: web::Data<GoalService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    let goal_id = parse_goal_id(&path.into_inner())?;

    let goal = goal_service.get_goal(user_id, goal_id).await?;
    let goal_response: GoalResponse = goal.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_GOAL_FOUND, goal_response)))
}

/// Update one of the authenticated user's goals
///
/// Only the fields present in the body change. The balance only moves through
/// deposits.
#[utoipa::path(
    put,
    path = "/api/goals/{id}",
    tag = "Goals",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "Goal updated", body = GoalResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Goal belongs to another user", body = crate::models::ErrorResponse),
        (status = 404, description = "Goal not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_goal(
    goal_service: web::Data<GoalService>,
    path: web::Path<String>,
    body: web::Json<UpdateGoalRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    let goal_id = parse_goal_id(&path.into_inner())?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let goal = goal_service
        .update_goal(user_id, goal_id, body.into_inner())
        .await?;
    let goal_response: GoalResponse = goal.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_GOAL_UPDATED, goal_response)))
}

/// Delete one of the authenticated user's goals
#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    tag = "Goals",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal deleted"),
        (status = 400, description = "Invalid goal ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Goal belongs to another user", body = crate::models::ErrorResponse),
        (status = 404, description = "Goal not found or already deleted", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_goal(
    goal_service: web::Data<GoalService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    let goal_id = parse_goal_id(&path.into_inner())?;

    goal_service.delete_goal(user_id, goal_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_GOAL_DELETED)))
}

/// Deposit money into one of the authenticated user's goals
#[utoipa::path(
    post,
    path = "/api/goals/deposit/{id}",
    tag = "Goals",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    request_body = DepositRequest,
    responses(
        (status = 200, description = "Deposit registered", body = GoalResponse),
        (status = 400, description = "Invalid amount or goal ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Goal belongs to another user", body = crate::models::ErrorResponse),
        (status = 404, description = "Goal not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn deposit(
    goal_service: web::Data<GoalService>,
    path: web::Path<String>,
    body: web::Json<DepositRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&req)?;
    let goal_id = parse_goal_id(&path.into_inner())?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let goal = goal_service.deposit(user_id, goal_id, body.amount).await?;
    let goal_response: GoalResponse = goal.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_DEPOSIT_SUCCESS, goal_response)))
}
