//! Well-known role names embedded in access-token claims.
//!
//! The database stores a boolean `users.is_admin`; these constants are its
//! string form inside JWTs.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Map the `is_admin` column to a role name.
pub fn role_name(is_admin: bool) -> &'static str {
    if is_admin {
        ROLE_ADMIN
    } else {
        ROLE_USER
    }
}
