//! Repository for the per-user recipe collections: `favorites` and
//! `purchases` (the shopping cart).

use foodgram_core::relation::{AddOutcome, RemoveOutcome};
use foodgram_core::types::DbId;
use sqlx::PgPool;

use crate::models::relation::{RecipeList, RecipeListEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, recipe_id, created_at";

/// Add/remove/contains over a [`RecipeList`].
pub struct RecipeListRepo;

impl RecipeListRepo {
    /// Add a recipe to the user's list.
    ///
    /// A single `INSERT ... ON CONFLICT DO NOTHING` so that concurrent
    /// duplicates resolve to [`AddOutcome::AlreadyExists`] instead of a
    /// unique-violation error.
    pub async fn add(
        pool: &PgPool,
        list: RecipeList,
        user_id: DbId,
        recipe_id: DbId,
    ) -> Result<AddOutcome<RecipeListEntry>, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (user_id, recipe_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, recipe_id) DO NOTHING
             RETURNING {COLUMNS}",
            list.table()
        );
        let row = sqlx::query_as::<_, RecipeListEntry>(&query)
            .bind(user_id)
            .bind(recipe_id)
            .fetch_optional(pool)
            .await?;
        Ok(match row {
            Some(entry) => AddOutcome::Created(entry),
            None => AddOutcome::AlreadyExists,
        })
    }

    /// Remove a recipe from the user's list.
    pub async fn remove(
        pool: &PgPool,
        list: RecipeList,
        user_id: DbId,
        recipe_id: DbId,
    ) -> Result<RemoveOutcome, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE user_id = $1 AND recipe_id = $2",
            list.table()
        );
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(recipe_id)
            .execute(pool)
            .await?;
        Ok(RemoveOutcome::from_removed(result.rows_affected() > 0))
    }

    /// Whether the recipe is in the user's list.
    pub async fn contains(
        pool: &PgPool,
        list: RecipeList,
        user_id: DbId,
        recipe_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE user_id = $1 AND recipe_id = $2)",
            list.table()
        );
        let row: (bool,) = sqlx::query_as(&query)
            .bind(user_id)
            .bind(recipe_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Number of recipes in the user's list.
    pub async fn count_for_user(
        pool: &PgPool,
        list: RecipeList,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {} WHERE user_id = $1", list.table());
        let row: (i64,) = sqlx::query_as(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
