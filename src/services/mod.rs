//! Services organized by domain concern.

pub mod auth_service;
pub mod goal_service;
pub mod google_oauth;
pub mod user_service;

pub use auth_service::AuthService;
pub use goal_service::GoalService;
pub use google_oauth::{AuthorizationRequest, GoogleOAuthService, GoogleUserInfo};
pub use user_service::UserService;
