//! Repository for the `follows` table (subscriptions to authors).

use foodgram_core::relation::{AddOutcome, RemoveOutcome};
use foodgram_core::types::DbId;
use sqlx::PgPool;

use crate::models::relation::Follow;
use crate::models::user::UserProfile;
use crate::repositories::user_repo::PROFILE_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, author_id, created_at";

/// Provides follow/unfollow and the subscriptions listing.
pub struct FollowRepo;

impl FollowRepo {
    /// Subscribe `user_id` to `author_id`.
    ///
    /// Self-follows are rejected by `ck_follows_not_self`; callers check
    /// first so the user sees a validation error.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        author_id: DbId,
    ) -> Result<AddOutcome<Follow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO follows (user_id, author_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, author_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Follow>(&query)
            .bind(user_id)
            .bind(author_id)
            .fetch_optional(pool)
            .await?;
        Ok(match row {
            Some(follow) => AddOutcome::Created(follow),
            None => AddOutcome::AlreadyExists,
        })
    }

    /// Unsubscribe `user_id` from `author_id`.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        author_id: DbId,
    ) -> Result<RemoveOutcome, sqlx::Error> {
        let result = sqlx::query("DELETE FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id)
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(RemoveOutcome::from_removed(result.rows_affected() > 0))
    }

    /// Authors followed by `user_id`, most recent subscription first.
    pub async fn list_authors(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {PROFILE_COLUMNS}
             FROM follows fo
             JOIN users u ON u.id = fo.author_id
             WHERE fo.user_id = $1
             ORDER BY fo.created_at DESC, fo.id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of authors followed by `user_id`.
    pub async fn count_authors(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM follows WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
