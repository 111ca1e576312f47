//! Masking of personal data before it reaches the logs.

/// Keep the first three characters of `value` and star out the rest.
fn mask_prefix(value: &str) -> String {
    let visible: String = value.chars().take(3).collect();
    format!("{}***", visible)
}

/// Mask an email address for logging, keeping the domain.
///
/// ```ignore
/// assert_eq!(mask_email("saver@example.com"), "sav***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_prefix(local), domain),
        None => mask_prefix(email),
    }
}

pub fn mask_username(username: &str) -> String {
    mask_prefix(username)
}
