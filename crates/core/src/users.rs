//! User account rules: username charset, reserved names, password length.
//!
//! The `validate_*` functions plug into `#[validate(custom(function = ...))]`
//! on request DTOs.

use validator::ValidationError;

/// Maximum length of usernames and first/last names.
pub const MAX_NAME_LEN: u64 = 150;

/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: u64 = 254;

/// Minimum password length enforced on sign-up and password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Usernames that would shadow fixed `/users/...` routes.
pub const RESERVED_USERNAMES: &[&str] = &["me", "subscriptions", "set_password"];

/// Usernames may contain letters, digits and `.@+-_` only.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if RESERVED_USERNAMES.contains(&username.to_lowercase().as_str()) {
        return Err(ValidationError::new("username")
            .with_message(format!("Username '{username}' is reserved").into()));
    }

    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '.' | '@' | '+' | '-' | '_');
    if username.is_empty() || !username.chars().all(allowed) {
        return Err(ValidationError::new("username").with_message(
            "Username may contain only letters, digits and . @ + - _".into(),
        ));
    }
    Ok(())
}
