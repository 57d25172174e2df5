//! Repository for `recipes` and their owned tag links and ingredient lines.

use std::collections::HashMap;

use foodgram_core::types::DbId;
use sqlx::PgPool;

use crate::models::recipe::{
    AuthorRecipe, CreateRecipe, IngredientAmount, Recipe, RecipeDetail, RecipeFilter,
    RecipeRow, RecipeShort, UpdateRecipe,
};
use crate::repositories::{IngredientRepo, TagRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, name, text, cooking_time, pub_date, created_at, updated_at";

/// Recipe columns for `r` plus the viewer flags, with the viewer bound as `$1`.
const ROW_COLUMNS: &str = "r.id, r.author_id, r.name, r.text, r.cooking_time, r.pub_date, \
     EXISTS (SELECT 1 FROM favorites f WHERE f.recipe_id = r.id AND f.user_id = $1::BIGINT) \
     AS is_favorited, \
     EXISTS (SELECT 1 FROM purchases p WHERE p.recipe_id = r.id AND p.user_id = $1::BIGINT) \
     AS is_in_shopping_cart";

/// List filter over `r`. Binds: `$1` viewer, `$2` author, `$3` tag slugs,
/// `$4` favorited only, `$5` in cart only.
///
/// A NULL viewer never matches the favorite/cart sub-queries, so the boolean
/// filters return nothing for anonymous callers.
const FILTER: &str = "($2::BIGINT IS NULL OR r.author_id = $2)
     AND (cardinality($3::TEXT[]) = 0 OR EXISTS (
            SELECT 1 FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id
            WHERE rt.recipe_id = r.id AND t.slug = ANY($3)))
     AND (NOT $4 OR EXISTS (
            SELECT 1 FROM favorites f WHERE f.recipe_id = r.id AND f.user_id = $1::BIGINT))
     AND (NOT $5 OR EXISTS (
            SELECT 1 FROM purchases p WHERE p.recipe_id = r.id AND p.user_id = $1::BIGINT))";

/// Provides CRUD operations and viewer-aware reads for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a recipe with its tag links and ingredient lines in one
    /// transaction.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateRecipe,
    ) -> Result<Recipe, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO recipes (author_id, name, text, cooking_time)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&query)
            .bind(author_id)
            .bind(&input.name)
            .bind(&input.text)
            .bind(input.cooking_time)
            .fetch_one(&mut *tx)
            .await?;

        Self::set_tags_inner(&mut tx, recipe.id, &input.tags).await?;
        Self::set_ingredients_inner(&mut tx, recipe.id, &input.ingredients).await?;

        tx.commit().await?;
        Ok(recipe)
    }

    /// Find a recipe by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the short form of a recipe by ID.
    pub async fn find_short(pool: &PgPool, id: DbId) -> Result<Option<RecipeShort>, sqlx::Error> {
        sqlx::query_as::<_, RecipeShort>("SELECT id, name, cooking_time FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a recipe in one transaction.
    ///
    /// Scalar fields that are `None` keep their value. A supplied `tags` or
    /// `ingredients` list replaces the existing set. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE recipes SET
                name = COALESCE($2, name),
                text = COALESCE($3, text),
                cooking_time = COALESCE($4, cooking_time)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(recipe) = sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.text)
            .bind(input.cooking_time)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(tags) = &input.tags {
            Self::set_tags_inner(&mut tx, id, tags).await?;
        }
        if let Some(ingredients) = &input.ingredients {
            Self::set_ingredients_inner(&mut tx, id, ingredients).await?;
        }

        tx.commit().await?;
        Ok(Some(recipe))
    }

    /// Delete a recipe. Tag links, ingredient lines and favorite/cart entries
    /// go with it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load one fully hydrated recipe as seen by `viewer_id`.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        viewer_id: Option<DbId>,
    ) -> Result<Option<RecipeDetail>, sqlx::Error> {
        let query = format!("SELECT {ROW_COLUMNS} FROM recipes r WHERE r.id = $2");
        let row = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(viewer_id)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match row {
            Some(row) => Ok(Self::hydrate(pool, vec![row], viewer_id).await?.pop()),
            None => Ok(None),
        }
    }

    /// List hydrated recipes matching `filter`, newest first.
    pub async fn list_details(
        pool: &PgPool,
        filter: &RecipeFilter,
        viewer_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RecipeDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {ROW_COLUMNS} FROM recipes r
             WHERE {FILTER}
             ORDER BY r.pub_date DESC, r.id DESC
             LIMIT $6 OFFSET $7"
        );
        let rows = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(viewer_id)
            .bind(filter.author_id)
            .bind(&filter.tag_slugs)
            .bind(filter.favorited_only)
            .bind(filter.in_cart_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Self::hydrate(pool, rows, viewer_id).await
    }

    /// Count recipes matching `filter`.
    pub async fn count(
        pool: &PgPool,
        filter: &RecipeFilter,
        viewer_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM recipes r WHERE {FILTER}");
        let row: (i64,) = sqlx::query_as(&query)
            .bind(viewer_id)
            .bind(filter.author_id)
            .bind(&filter.tag_slugs)
            .bind(filter.favorited_only)
            .bind(filter.in_cart_only)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Newest `per_author` short recipes of each given author.
    pub async fn short_by_authors(
        pool: &PgPool,
        author_ids: &[DbId],
        per_author: i64,
    ) -> Result<Vec<AuthorRecipe>, sqlx::Error> {
        sqlx::query_as::<_, AuthorRecipe>(
            "SELECT author_id, id, name, cooking_time FROM (
                SELECT r.author_id, r.id, r.name, r.cooking_time, r.pub_date,
                       ROW_NUMBER() OVER (
                           PARTITION BY r.author_id ORDER BY r.pub_date DESC, r.id DESC
                       ) AS rn
                FROM recipes r
                WHERE r.author_id = ANY($1)
             ) ranked
             WHERE rn <= $2
             ORDER BY author_id, pub_date DESC, id DESC",
        )
        .bind(author_ids)
        .bind(per_author)
        .fetch_all(pool)
        .await
    }

    /// Total recipe count per author, for the given authors.
    pub async fn count_by_authors(
        pool: &PgPool,
        author_ids: &[DbId],
    ) -> Result<Vec<(DbId, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT author_id, COUNT(*) FROM recipes
             WHERE author_id = ANY($1)
             GROUP BY author_id",
        )
        .bind(author_ids)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace tag links within an existing transaction.
    async fn set_tags_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        recipe_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&mut **tx)
            .await?;

        for &tag_id in tag_ids {
            sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
                .bind(recipe_id)
                .bind(tag_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    /// Replace ingredient lines within an existing transaction, keeping the
    /// request order.
    async fn set_ingredients_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        recipe_id: DbId,
        lines: &[IngredientAmount],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&mut **tx)
            .await?;

        for line in lines {
            sqlx::query(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount)
                 VALUES ($1, $2, $3)",
            )
            .bind(recipe_id)
            .bind(line.id)
            .bind(line.amount)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Attach tags, ingredient lines and author profiles to recipe rows.
    ///
    /// Three batch reads regardless of page size. Row order is preserved.
    async fn hydrate(
        pool: &PgPool,
        rows: Vec<RecipeRow>,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<RecipeDetail>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut author_ids: Vec<DbId> = rows.iter().map(|r| r.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let mut tags: HashMap<DbId, Vec<_>> = HashMap::new();
        for tag in TagRepo::list_for_recipes(pool, &recipe_ids).await? {
            tags.entry(tag.recipe_id).or_default().push(tag);
        }

        let mut ingredients: HashMap<DbId, Vec<_>> = HashMap::new();
        for line in IngredientRepo::list_for_recipes(pool, &recipe_ids).await? {
            ingredients.entry(line.recipe_id).or_default().push(line);
        }

        let authors: HashMap<DbId, _> = UserRepo::find_profiles(pool, &author_ids, viewer_id)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let details = rows
            .into_iter()
            .filter_map(|row| {
                let author = authors.get(&row.author_id)?.clone();
                Some(RecipeDetail {
                    id: row.id,
                    tags: tags.remove(&row.id).unwrap_or_default(),
                    author,
                    ingredients: ingredients.remove(&row.id).unwrap_or_default(),
                    name: row.name,
                    text: row.text,
                    cooking_time: row.cooking_time,
                    pub_date: row.pub_date,
                    is_favorited: row.is_favorited,
                    is_in_shopping_cart: row.is_in_shopping_cart,
                })
            })
            .collect();

        Ok(details)
    }
}
