use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AuthResponse, CreateGoalRequest, DepositRequest, ErrorResponse, GoalResponse, GoalSummary,
    HealthResponse, LoginRequest, PaginatedGoalResponse, SignupRequest, UpdateGoalRequest,
    UserResponse,
};

/// OpenAPI documentation for the savings goals API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Savings Goals API",
        version = "1.0.0",
        description = "REST API for personal savings goals: accounts, Google sign-in, goal tracking and deposits.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "Signup, login and Google sign-in"),
        (name = "Users", description = "Authenticated user profile"),
        (name = "Goals", description = "Savings goals, deposits and the dashboard summary")
    ),
    paths(
        crate::handlers::signup,
        crate::handlers::login,
        crate::handlers::google_login,
        crate::handlers::google_callback,
        crate::handlers::get_profile,
        crate::handlers::create_goal,
        crate::handlers::get_goals,
        crate::handlers::get_goals_info,
        crate::handlers::get_goal,
        crate::handlers::update_goal,
        crate::handlers::delete_goal,
        crate::handlers::deposit,
        crate::routes::health_check
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            CreateGoalRequest,
            UpdateGoalRequest,
            DepositRequest,
            UserResponse,
            AuthResponse,
            GoalResponse,
            GoalSummary,
            PaginatedGoalResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT issued by /api/auth/login or /auth/google/callback",
                        ))
                        .build(),
                ),
            );
        }
    }
}
