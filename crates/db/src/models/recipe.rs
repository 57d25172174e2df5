//! Recipe entity model, request DTOs and response shapes.

use foodgram_core::catalog::parse_slug_list;
use foodgram_core::recipe::MAX_RECIPE_NAME_LEN;
use foodgram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::tag::RecipeTag;
use crate::models::user::UserProfile;

/// A row from the `recipes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: DbId,
    pub author_id: DbId,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub pub_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A recipe row annotated with the viewer's favorite/cart flags.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: DbId,
    pub author_id: DbId,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub pub_date: Timestamp,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// One ingredient line of a recipe, joined with its catalog entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipeIngredient {
    #[serde(skip)]
    pub recipe_id: DbId,
    pub id: DbId,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Full recipe as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: DbId,
    pub tags: Vec<RecipeTag>,
    pub author: UserProfile,
    pub ingredients: Vec<RecipeIngredient>,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub pub_date: Timestamp,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// Compact recipe used in favorite/cart responses and subscription listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipeShort {
    pub id: DbId,
    pub name: String,
    pub cooking_time: i32,
}

/// Short recipe tagged with its author, for per-author batch reads.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorRecipe {
    pub author_id: DbId,
    pub id: DbId,
    pub name: String,
    pub cooking_time: i32,
}

impl From<AuthorRecipe> for RecipeShort {
    fn from(row: AuthorRecipe) -> Self {
        Self {
            id: row.id,
            name: row.name,
            cooking_time: row.cooking_time,
        }
    }
}

/// `{ "id": ingredient_id, "amount": n }` in recipe write requests.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientAmount {
    pub id: DbId,
    pub amount: i32,
}

/// Flatten request lines into `(ingredient_id, amount)` pairs.
pub fn ingredient_lines(items: &[IngredientAmount]) -> Vec<(DbId, i32)> {
    items.iter().map(|i| (i.id, i.amount)).collect()
}

/// DTO for creating a recipe. The author comes from the authenticated user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecipe {
    pub tags: Vec<DbId>,
    pub ingredients: Vec<IngredientAmount>,
    #[validate(length(min = 1, max = MAX_RECIPE_NAME_LEN))]
    pub name: String,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(range(min = 1))]
    pub cooking_time: i32,
}

/// DTO for updating a recipe.
///
/// Omitted fields keep their value. A supplied `tags` or `ingredients` list
/// replaces the whole set.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRecipe {
    pub tags: Option<Vec<DbId>>,
    pub ingredients: Option<Vec<IngredientAmount>>,
    #[validate(length(min = 1, max = MAX_RECIPE_NAME_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub text: Option<String>,
    #[validate(range(min = 1))]
    pub cooking_time: Option<i32>,
}

/// Query parameters for `GET /recipes`.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub author: Option<DbId>,
    /// Tag slugs, as repeated `tags=` keys and/or comma-separated values. A
    /// recipe matches if it carries any of them.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_favorited: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_in_shopping_cart: Option<bool>,
}

impl RecipeListParams {
    /// Resolve the raw query into a repository filter.
    pub fn filter(&self) -> RecipeFilter {
        RecipeFilter {
            author_id: self.author,
            tag_slugs: self
                .tags
                .iter()
                .flat_map(|raw| parse_slug_list(raw))
                .collect(),
            favorited_only: self.is_favorited.unwrap_or(false),
            in_cart_only: self.is_in_shopping_cart.unwrap_or(false),
        }
    }
}

/// Resolved recipe list filter.
///
/// The boolean filters select recipes the viewer has favorited / put in the
/// cart. With no viewer they match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author_id: Option<DbId>,
    pub tag_slugs: Vec<String>,
    pub favorited_only: bool,
    pub in_cart_only: bool,
}

/// Accepts `1`/`0`/`true`/`false` for boolean query flags.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("1") | Some("true") | Some("True") => Ok(Some(true)),
        Some("0") | Some("false") | Some("False") => Ok(Some(false)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected 1, 0, true or false, got '{other}'"
        ))),
    }
}
