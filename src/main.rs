mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use log::{error, info, warn};
use mongodb::{bson::doc, Client};

use crate::config::CONFIG;
use crate::repositories::{GoalRepository, UserRepository};
use crate::services::{AuthService, GoalService, GoogleOAuthService, UserService};

fn cors() -> Cors {
    Cors::default()
        .allowed_origin(&CONFIG.cors_allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers(vec![header::CONTENT_LENGTH])
        .supports_credentials()
        .max_age(12 * 60 * 60)
}

fn io_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::other(format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| io_error("Failed to connect to MongoDB", e))?;

    let db = client.database(&CONFIG.database_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| io_error("Failed to ping MongoDB", e))?;
    info!("Connected to MongoDB database '{}'", CONFIG.database_name);

    let user_repository = Arc::new(UserRepository::new(&db));
    let goal_repository = Arc::new(GoalRepository::new(&db));
    user_repository
        .create_indexes()
        .await
        .map_err(|e| io_error("Failed to create user indexes", e))?;
    goal_repository
        .create_indexes()
        .await
        .map_err(|e| io_error("Failed to create goal indexes", e))?;

    // Initialize services
    let auth_service = web::Data::new(AuthService::new(user_repository.clone()));
    let user_service = web::Data::new(UserService::new(user_repository));
    let goal_service = web::Data::new(GoalService::new(goal_repository));
    let google_oauth = GoogleOAuthService::from_config(&CONFIG)
        .map_err(|e| io_error("Invalid Google OAuth configuration", e))?
        .map(web::Data::new);
    if google_oauth.is_none() {
        warn!("GOOGLE_CLIENT_ID/GOOGLE_CLIENT_SECRET not set; Google sign-in is disabled");
    }

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .app_data(goal_service.clone());
        if let Some(oauth) = &google_oauth {
            app = app.app_data(oauth.clone());
        }
        app.configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
