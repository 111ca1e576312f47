use actix_web::{web, HttpResponse};
use log::debug;
use utoipa::OpenApi;

use crate::constants::{CODE_BAD_REQUEST, ERR_INVALID_QUERY, ERR_INVALID_REQUEST_BODY, MSG_WELCOME};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::models::{ApiResponse, HealthResponse};
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON or query strings answer with our error envelope instead of plain text
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejected request body: {}", err);
        ApiError::bad_request(CODE_BAD_REQUEST, ERR_INVALID_REQUEST_BODY).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        debug!("Rejected query string: {}", err);
        ApiError::bad_request(CODE_BAD_REQUEST, ERR_INVALID_QUERY).into()
    });

    cfg.app_data(json_config)
        .app_data(query_config)
        .route("/", web::get().to(root))
        .route("/api/health", web::get().to(health_check))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // Auth routes (public)
        .service(
            web::scope("/api/auth")
                .route("/signup", web::post().to(handlers::signup))
                .route("/login", web::post().to(handlers::login)),
        )
        .service(
            web::scope("/auth/google")
                .route("/login", web::get().to(handlers::google_login))
                .route("/callback", web::get().to(handlers::google_callback)),
        )
        // User routes (protected)
        .service(
            web::scope("/user")
                .wrap(AuthMiddleware)
                .route("/profile", web::get().to(handlers::get_profile)),
        )
        // Goal routes (protected)
        .service(
            web::scope("/api/goals")
                .wrap(AuthMiddleware)
                .route("", web::get().to(handlers::get_goals))
                .route("", web::post().to(handlers::create_goal))
                // Must be before /{id} to avoid conflict
                .route("/info", web::get().to(handlers::get_goals_info))
                .route("/deposit/{id}", web::post().to(handlers::deposit))
                .route("/{id}", web::get().to(handlers::get_goal))
                .route("/{id}", web::put().to(handlers::update_goal))
                .route("/{id}", web::delete().to(handlers::delete_goal)),
        );
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_WELCOME))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        body::MessageBody,
        dev::{Service, ServiceResponse},
        http::{header::AUTHORIZATION, StatusCode},
        test, App,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::constants::{
        CODE_EMAIL_EXISTS, CODE_FORBIDDEN, CODE_GOAL_NOT_FOUND, CODE_INVALID_CREDENTIALS,
        CODE_INVALID_GOAL_ID, CODE_INVALID_TOKEN, CODE_VALIDATION_FAILED,
    };
    use crate::repositories::memory::{InMemoryGoalRepository, InMemoryUserRepository};
    use crate::services::{AuthService, GoalService, UserService};

    async fn app() -> impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    > {
        let users = Arc::new(InMemoryUserRepository::default());
        let goals = Arc::new(InMemoryGoalRepository::default());

        test::init_service(
            App::new()
                .app_data(web::Data::new(AuthService::with_hash_cost(users.clone(), 4)))
                .app_data(web::Data::new(UserService::new(users)))
                .app_data(web::Data::new(GoalService::new(goals)))
                .configure(configure_routes),
        )
        .await
    }

    async fn call(
        app: &impl Service<
            actix_http::Request,
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
        >,
        req: test::TestRequest,
    ) -> (StatusCode, Value) {
        // Errors returned by middleware are rendered the same way the server does.
        let (status, body) = match test::try_call_service(app, req.to_request()).await {
            Ok(resp) => {
                let status = resp.status();
                (status, test::read_body(resp).await)
            }
            Err(err) => {
                let resp = err.error_response();
                let status = resp.status();
                let body = actix_web::body::to_bytes(resp.into_body())
                    .await
                    .unwrap_or_default();
                (status, body)
            }
        };
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
        (AUTHORIZATION, format!("Bearer {}", token))
    }

    /// Sign up and log in, returning the JWT.
    async fn register(
        app: &impl Service<
            actix_http::Request,
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
        >,
        email: &str,
        username: &str,
    ) -> String {
        let (status, _) = call(
            app,
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "email": email,
                "username": username,
                "password": "correct-horse"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call(
            app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "email": email, "password": "correct-horse" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    async fn create_goal(
        app: &impl Service<
            actix_http::Request,
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
        >,
        token: &str,
        title: &str,
        target_value: f64,
    ) -> String {
        let (status, body) = call(
            app,
            test::TestRequest::post()
                .uri("/api/goals")
                .insert_header(bearer(token))
                .set_json(json!({ "title": title, "target_value": target_value })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }

    #[actix_web::test]
    async fn test_public_endpoints() {
        let app = app().await;

        let (status, body) = call(&app, test::TestRequest::get().uri("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], MSG_WELCOME);

        let (status, body) = call(&app, test::TestRequest::get().uri("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");

        let (status, body) =
            call(&app, test::TestRequest::get().uri("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/goals/deposit/{id}"].is_object());
    }

    #[actix_web::test]
    async fn test_protected_routes_require_token() {
        let app = app().await;

        let (status, body) = call(&app, test::TestRequest::get().uri("/api/goals")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], CODE_INVALID_TOKEN);

        let (status, _) = call(
            &app,
            test::TestRequest::get()
                .uri("/user/profile")
                .insert_header(bearer("not-a-jwt")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_signup_login_and_profile() {
        let app = app().await;
        let token = register(&app, "saver@example.com", "saver").await;

        let (status, body) = call(
            &app,
            test::TestRequest::get()
                .uri("/user/profile")
                .insert_header(bearer(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "saver@example.com");
        assert!(body["data"].get("password_hash").is_none());

        let (status, body) = call(
            &app,
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "email": "saver@example.com",
                "username": "someone",
                "password": "correct-horse"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], CODE_EMAIL_EXISTS);

        let (status, body) = call(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "email": "saver@example.com", "password": "wrong-pass" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], CODE_INVALID_CREDENTIALS);
    }

    #[actix_web::test]
    async fn test_signup_validation_and_bad_json() {
        let app = app().await;

        let (status, body) = call(
            &app,
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "email": "not-an-email",
                "username": "a b",
                "password": "short"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], CODE_VALIDATION_FAILED);
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);

        let (status, body) = call(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], ERR_INVALID_REQUEST_BODY);
    }

    #[actix_web::test]
    async fn test_goal_lifecycle() {
        let app = app().await;
        let token = register(&app, "saver@example.com", "saver").await;
        let id = create_goal(&app, &token, "Bike", 300.0).await;

        let (status, body) = call(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/goals/deposit/{}", id))
                .insert_header(bearer(&token))
                .set_json(json!({ "amount": 120.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["balance"], 120.5);
        assert_eq!(body["data"]["completed"], false);

        let (status, body) = call(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/goals/{}", id))
                .insert_header(bearer(&token))
                .set_json(json!({ "target_value": 100.0, "balance": 0.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["balance"], 120.5);
        assert_eq!(body["data"]["completed"], true);

        let (status, body) = call(
            &app,
            test::TestRequest::get()
                .uri("/api/goals/info")
                .insert_header(bearer(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total_goals"], 1);
        assert_eq!(body["data"]["completed_goals"], 1);

        let (status, body) = call(
            &app,
            test::TestRequest::get()
                .uri("/api/goals?completed=true&per_page=5")
                .insert_header(bearer(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["per_page"], 5);

        let delete = || {
            test::TestRequest::delete()
                .uri(&format!("/api/goals/{}", id))
                .insert_header(bearer(&token))
        };
        let (status, _) = call(&app, delete()).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = call(&app, delete()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], CODE_GOAL_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_deposit_rejects_non_positive_amount() {
        let app = app().await;
        let token = register(&app, "saver@example.com", "saver").await;
        let id = create_goal(&app, &token, "Bike", 300.0).await;

        for amount in [0.0, -5.0] {
            let (status, _) = call(
                &app,
                test::TestRequest::post()
                    .uri(&format!("/api/goals/deposit/{}", id))
                    .insert_header(bearer(&token))
                    .set_json(json!({ "amount": amount })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let (_, body) = call(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/goals/{}", id))
                .insert_header(bearer(&token)),
        )
        .await;
        assert_eq!(body["data"]["balance"], 0.0);
    }

    #[actix_web::test]
    async fn test_goals_are_private_to_their_owner() {
        let app = app().await;
        let owner = register(&app, "owner@example.com", "owner").await;
        let intruder = register(&app, "intruder@example.com", "intruder").await;
        let id = create_goal(&app, &owner, "Private", 50.0).await;

        let (status, body) = call(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/goals/{}", id))
                .insert_header(bearer(&intruder)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], CODE_FORBIDDEN);

        let (status, _) = call(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/goals/deposit/{}", id))
                .insert_header(bearer(&intruder))
                .set_json(json!({ "amount": 10.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, body) = call(
            &app,
            test::TestRequest::get()
                .uri("/api/goals")
                .insert_header(bearer(&intruder)),
        )
        .await;
        assert_eq!(body["total"], 0);

        let (status, body) = call(
            &app,
            test::TestRequest::get()
                .uri("/api/goals/not-an-id")
                .insert_header(bearer(&owner)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], CODE_INVALID_GOAL_ID);
    }

    #[actix_web::test]
    async fn test_blank_title_and_out_of_range_page() {
        let app = app().await;
        let token = register(&app, "saver@example.com", "saver").await;

        let (status, body) = call(
            &app,
            test::TestRequest::post()
                .uri("/api/goals")
                .insert_header(bearer(&token))
                .set_json(json!({ "title": "   ", "target_value": 100.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], CODE_VALIDATION_FAILED);

        let id = create_goal(&app, &token, "Bike", 300.0).await;
        let (status, _) = call(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/goals/{}", id))
                .insert_header(bearer(&token))
                .set_json(json!({ "title": " \t " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = call(
            &app,
            test::TestRequest::get()
                .uri("/api/goals?page=18446744073709551615&per_page=100")
                .insert_header(bearer(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }
}
