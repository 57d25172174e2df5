//! Repository for the `ingredients` catalog.

use foodgram_core::catalog::escape_like;
use foodgram_core::types::DbId;
use sqlx::PgPool;

use crate::models::ingredient::{CreateIngredient, Ingredient, UpdateIngredient};
use crate::models::recipe::RecipeIngredient;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, measurement_unit, created_at, updated_at";

/// Provides CRUD operations and prefix search for ingredients.
pub struct IngredientRepo;

impl IngredientRepo {
    /// Insert a new ingredient, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIngredient,
    ) -> Result<Ingredient, sqlx::Error> {
        let query = format!(
            "INSERT INTO ingredients (name, measurement_unit)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(&input.name)
            .bind(&input.measurement_unit)
            .fetch_one(pool)
            .await
    }

    /// Find an ingredient by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ingredient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ingredients WHERE id = $1");
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ingredients ordered by name, optionally filtered by a
    /// case-insensitive name prefix.
    pub async fn list(
        pool: &PgPool,
        name_prefix: Option<&str>,
    ) -> Result<Vec<Ingredient>, sqlx::Error> {
        let pattern = name_prefix
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}%", escape_like(&p.to_lowercase())));
        let query = format!(
            "SELECT {COLUMNS} FROM ingredients
             WHERE ($1::TEXT IS NULL OR lower(name) LIKE $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update an ingredient. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIngredient,
    ) -> Result<Option<Ingredient>, sqlx::Error> {
        let query = format!(
            "UPDATE ingredients SET
                name = COALESCE($2, name),
                measurement_unit = COALESCE($3, measurement_unit)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.measurement_unit)
            .fetch_optional(pool)
            .await
    }

    /// Delete an ingredient by ID. Returns `true` if a row was removed.
    ///
    /// Recipe lines referencing it are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the subset of `ids` with no matching ingredient.
    pub async fn find_missing(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT req.id FROM UNNEST($1::BIGINT[]) AS req(id)
             WHERE NOT EXISTS (SELECT 1 FROM ingredients i WHERE i.id = req.id)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Ingredient lines of any of the given recipes, in line order.
    pub async fn list_for_recipes(
        pool: &PgPool,
        recipe_ids: &[DbId],
    ) -> Result<Vec<RecipeIngredient>, sqlx::Error> {
        sqlx::query_as::<_, RecipeIngredient>(
            "SELECT ri.recipe_id, i.id, i.name, i.measurement_unit, ri.amount
             FROM recipe_ingredients ri
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE ri.recipe_id = ANY($1)
             ORDER BY ri.id",
        )
        .bind(recipe_ids)
        .fetch_all(pool)
        .await
    }
}
