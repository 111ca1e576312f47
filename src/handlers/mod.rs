//! HTTP request handlers organized by domain.

pub mod auth_handler;
pub mod goal_handler;
pub mod oauth_handler;
pub mod user_handler;

pub use auth_handler::*;
pub use goal_handler::*;
pub use oauth_handler::*;
pub use user_handler::*;
