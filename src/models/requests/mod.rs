//! Request models for API endpoints.

pub mod auth;
pub mod goal;

pub use auth::*;
pub use goal::*;
