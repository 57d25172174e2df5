//! Shared query parameter types for API handlers.

use foodgram_core::pagination::{clamp_limit, clamp_offset, MAX_PAGE_SIZE};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamp to `(limit, offset)` using `default_limit` when none is given.
    pub fn resolve(&self, default_limit: i64) -> (i64, i64) {
        (
            clamp_limit(self.limit, default_limit, MAX_PAGE_SIZE),
            clamp_offset(self.offset),
        )
    }
}

/// Query parameters for `GET /users/subscriptions`.
#[derive(Debug, Default, Deserialize)]
pub struct SubscriptionParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// How many recipes to embed per author.
    pub recipes_limit: Option<i64>,
}

impl SubscriptionParams {
    pub fn page(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
