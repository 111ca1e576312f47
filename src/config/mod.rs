use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub bcrypt_cost: u32,
    pub google_client_id: Option<String>,
    pub google_client_secret: Option<String>,
    pub google_redirect_url: String,
    pub cors_allowed_origin: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "goals".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-super-secret-jwt-key-change-in-production".to_string()),
            jwt_expiration_hours: parse_expiration_hours(
                &env::var("JWT_EXPIRATION_HOURS").unwrap_or_else(|_| "24".to_string()),
            )
            .expect("JWT_EXPIRATION_HOURS must be a positive whole number of hours"),
            bcrypt_cost: env::var("BCRYPT_COST")
                .map(|v| v.parse().expect("BCRYPT_COST must be a valid number"))
                .unwrap_or(bcrypt::DEFAULT_COST),
            google_client_id: non_empty_var("GOOGLE_CLIENT_ID"),
            google_client_secret: non_empty_var("GOOGLE_CLIENT_SECRET"),
            google_redirect_url: env::var("GOOGLE_REDIRECT_URL")
                .unwrap_or_else(|_| "http://localhost:8080/auth/google/callback".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }

    /// Google credentials, present only when both halves are configured.
    pub fn google_credentials(&self) -> Option<(&str, &str)> {
        match (&self.google_client_id, &self.google_client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

/// Token lifetime in hours; zero, negative or non-numeric values are rejected.
fn parse_expiration_hours(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|hours| *hours > 0)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_must_be_positive() {
        assert_eq!(parse_expiration_hours("24"), Some(24));
        assert_eq!(parse_expiration_hours(" 1 "), Some(1));
        assert_eq!(parse_expiration_hours("0"), None);
        assert_eq!(parse_expiration_hours("-1"), None);
        assert_eq!(parse_expiration_hours("soon"), None);
    }
}
