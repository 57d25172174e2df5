//! Shared add/remove logic for the favorites list and the shopping cart.

use axum::http::StatusCode;
use axum::Json;
use foodgram_core::error::CoreError;
use foodgram_core::relation::{require_created, require_removed};
use foodgram_core::types::DbId;
use foodgram_db::models::recipe::RecipeShort;
use foodgram_db::models::relation::RecipeList;
use foodgram_db::repositories::{RecipeListRepo, RecipeRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// Add a recipe to one of the caller's lists.
///
/// 404 if the recipe does not exist, 400 `ALREADY_EXISTS` if it is already
/// in the list. Returns the short recipe with 201.
pub async fn add_to_list(
    pool: &PgPool,
    list: RecipeList,
    auth: &AuthUser,
    recipe_id: DbId,
) -> AppResult<(StatusCode, Json<DataResponse<RecipeShort>>)> {
    let recipe = find_recipe(pool, recipe_id).await?;

    let outcome = RecipeListRepo::add(pool, list, auth.user_id, recipe_id).await?;
    require_created(outcome, list.kind(), recipe_id)?;

    tracing::info!(
        recipe_id,
        user_id = auth.user_id,
        list = list.kind().label(),
        "Recipe added to list"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: recipe })))
}

/// Remove a recipe from one of the caller's lists.
///
/// 404 if the recipe does not exist, 400 `NOT_FOUND_RELATION` if it is not in
/// the list.
pub async fn remove_from_list(
    pool: &PgPool,
    list: RecipeList,
    auth: &AuthUser,
    recipe_id: DbId,
) -> AppResult<StatusCode> {
    find_recipe(pool, recipe_id).await?;

    let outcome = RecipeListRepo::remove(pool, list, auth.user_id, recipe_id).await?;
    require_removed(outcome, list.kind(), recipe_id)?;

    tracing::info!(
        recipe_id,
        user_id = auth.user_id,
        list = list.kind().label(),
        "Recipe removed from list"
    );

    Ok(StatusCode::NO_CONTENT)
}

async fn find_recipe(pool: &PgPool, recipe_id: DbId) -> AppResult<RecipeShort> {
    RecipeRepo::find_short(pool, recipe_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }))
}
