//! Ingredient catalog model and DTOs.

use foodgram_core::catalog::MAX_CATALOG_FIELD_LEN;
use foodgram_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `ingredients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ingredient {
    pub id: DbId,
    pub name: String,
    pub measurement_unit: String,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// DTO for creating a catalog ingredient.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIngredient {
    #[validate(length(min = 1, max = MAX_CATALOG_FIELD_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = MAX_CATALOG_FIELD_LEN))]
    pub measurement_unit: String,
}

/// DTO for updating a catalog ingredient. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateIngredient {
    #[validate(length(min = 1, max = MAX_CATALOG_FIELD_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = MAX_CATALOG_FIELD_LEN))]
    pub measurement_unit: Option<String>,
}

/// Query parameters for `GET /ingredients`.
#[derive(Debug, Default, Deserialize)]
pub struct IngredientListParams {
    /// Case-insensitive name prefix.
    pub name: Option<String>,
}
