//! Tag entity model and DTOs.

use foodgram_core::catalog::MAX_CATALOG_FIELD_LEN;
use foodgram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub slug: String,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// A tag attached to a recipe, carrying the recipe id for batch grouping.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipeTag {
    #[serde(skip)]
    pub recipe_id: DbId,
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub slug: String,
}

/// DTO for creating a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTag {
    #[validate(length(min = 1, max = MAX_CATALOG_FIELD_LEN))]
    pub name: String,
    #[validate(custom(function = "foodgram_core::catalog::validate_hex_color"))]
    pub color: String,
    #[validate(
        length(max = MAX_CATALOG_FIELD_LEN),
        custom(function = "foodgram_core::catalog::validate_slug")
    )]
    pub slug: String,
}

/// DTO for updating a tag. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTag {
    #[validate(length(min = 1, max = MAX_CATALOG_FIELD_LEN))]
    pub name: Option<String>,
    #[validate(custom(function = "foodgram_core::catalog::validate_hex_color"))]
    pub color: Option<String>,
    #[validate(
        length(max = MAX_CATALOG_FIELD_LEN),
        custom(function = "foodgram_core::catalog::validate_slug")
    )]
    pub slug: Option<String>,
}
