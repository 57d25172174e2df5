//! Pagination defaults and clamping helpers.
//!
//! List endpoints accept `?limit=&offset=`; repositories clamp the raw values
//! with these helpers before binding them into SQL.

/// Default page size for recipe and user listings.
pub const DEFAULT_PAGE_SIZE: i64 = 6;

/// Maximum page size accepted from clients.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default number of recipes embedded per author in the subscriptions list.
pub const DEFAULT_RECIPES_LIMIT: i64 = 3;

/// Maximum number of recipes embedded per author in the subscriptions list.
pub const MAX_RECIPES_LIMIT: i64 = 50;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
