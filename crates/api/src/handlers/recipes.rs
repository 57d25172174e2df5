//! Handlers for the `/recipes` resource.
//!
//! Reads are public and annotated for the viewer. Writes require
//! authentication; update and delete are limited to the author or an admin.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use foodgram_core::error::CoreError;
use foodgram_core::recipe::{
    ensure_can_modify, validate_cooking_time, validate_ingredient_lines, validate_recipe_name,
    validate_tag_ids,
};
use foodgram_core::types::DbId;
use foodgram_db::models::recipe::{
    ingredient_lines, CreateRecipe, IngredientAmount, RecipeDetail, RecipeListParams,
    UpdateRecipe,
};
use foodgram_db::repositories::{IngredientRepo, RecipeRepo, TagRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/recipes
///
/// Newest first. Filters: `author`, `tags` (comma-separated slugs, any
/// match), `is_favorited`, `is_in_shopping_cart` (`1`/`0`).
pub async fn list_recipes(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecipeListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = PaginationParams {
        limit: params.limit,
        offset: params.offset,
    }
    .resolve(state.config.page_size);
    let filter = params.filter();
    let viewer_id = viewer.viewer_id();

    let recipes = RecipeRepo::list_details(&state.pool, &filter, viewer_id, limit, offset).await?;
    let count = RecipeRepo::count(&state.pool, &filter, viewer_id).await?;

    Ok(Json(PageResponse {
        data: recipes,
        count,
        limit,
        offset,
    }))
}

/// GET /api/v1/recipes/{id}
pub async fn get_recipe(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = load_detail(&state.pool, recipe_id, viewer.viewer_id()).await?;
    Ok(Json(DataResponse { data: recipe }))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/v1/recipes
///
/// Create a recipe authored by the caller. The whole write is rejected if any
/// amount is below 1, an ingredient repeats, or a tag/ingredient id is
/// unknown.
pub async fn create_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecipe>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_recipe_name(&input.name)?;
    validate_cooking_time(input.cooking_time)?;
    check_tags(&state.pool, &input.tags).await?;
    check_ingredients(&state.pool, &input.ingredients).await?;

    let recipe = RecipeRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(recipe_id = recipe.id, user_id = auth.user_id, "Recipe created");

    let detail = load_detail(&state.pool, recipe.id, Some(auth.user_id)).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// PUT|PATCH /api/v1/recipes/{id}
///
/// Omitted fields keep their value; a supplied `tags` or `ingredients` list
/// replaces the existing set.
pub async fn update_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRecipe>,
) -> AppResult<impl IntoResponse> {
    let existing = RecipeRepo::find_by_id(&state.pool, recipe_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }))?;
    ensure_can_modify(existing.author_id, auth.user_id, auth.is_admin())?;

    input.validate()?;
    if let Some(name) = &input.name {
        validate_recipe_name(name)?;
    }
    if let Some(minutes) = input.cooking_time {
        validate_cooking_time(minutes)?;
    }
    if let Some(tags) = &input.tags {
        check_tags(&state.pool, tags).await?;
    }
    if let Some(ingredients) = &input.ingredients {
        check_ingredients(&state.pool, ingredients).await?;
    }

    RecipeRepo::update(&state.pool, recipe_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }))?;

    tracing::info!(recipe_id, user_id = auth.user_id, "Recipe updated");

    let detail = load_detail(&state.pool, recipe_id, Some(auth.user_id)).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/recipes/{id}
pub async fn delete_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = RecipeRepo::find_by_id(&state.pool, recipe_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }))?;
    ensure_can_modify(existing.author_id, auth.user_id, auth.is_admin())?;

    RecipeRepo::delete(&state.pool, recipe_id).await?;

    tracing::info!(recipe_id, user_id = auth.user_id, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn load_detail(
    pool: &PgPool,
    recipe_id: DbId,
    viewer_id: Option<DbId>,
) -> AppResult<RecipeDetail> {
    RecipeRepo::find_detail(pool, recipe_id, viewer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }))
}

/// Non-empty, unique, and every id present in the catalog.
async fn check_tags(pool: &PgPool, tag_ids: &[DbId]) -> AppResult<()> {
    validate_tag_ids(tag_ids)?;
    let missing = TagRepo::find_missing(pool, tag_ids).await?;
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown tag ids: {}",
            join_ids(&missing)
        ))));
    }
    Ok(())
}

/// Non-empty, amounts >= 1, no repeats, and every id present in the catalog.
async fn check_ingredients(pool: &PgPool, items: &[IngredientAmount]) -> AppResult<()> {
    let lines = ingredient_lines(items);
    validate_ingredient_lines(&lines)?;

    let ids: Vec<DbId> = lines.iter().map(|&(id, _)| id).collect();
    let missing = IngredientRepo::find_missing(pool, &ids).await?;
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown ingredient ids: {}",
            join_ids(&missing)
        ))));
    }
    Ok(())
}

fn join_ids(ids: &[DbId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
