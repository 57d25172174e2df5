//! Handlers for the `/ingredients` catalog. Reads are public, writes admin
//! only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use foodgram_core::error::CoreError;
use foodgram_core::types::DbId;
use foodgram_db::models::ingredient::{CreateIngredient, IngredientListParams, UpdateIngredient};
use foodgram_db::repositories::IngredientRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/ingredients?name=
///
/// All ingredients by name; `name` filters by case-insensitive prefix.
pub async fn list_ingredients(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IngredientListParams>,
) -> AppResult<impl IntoResponse> {
    let ingredients = IngredientRepo::list(&state.pool, params.name.as_deref()).await?;
    Ok(Json(DataResponse { data: ingredients }))
}

/// GET /api/v1/ingredients/{id}
pub async fn get_ingredient(
    State(state): State<AppState>,
    AppPath(ingredient_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let ingredient = IngredientRepo::find_by_id(&state.pool, ingredient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ingredient",
            id: ingredient_id,
        }))?;
    Ok(Json(DataResponse { data: ingredient }))
}

/// POST /api/v1/ingredients
pub async fn create_ingredient(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateIngredient>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let ingredient = IngredientRepo::create(&state.pool, &input).await?;

    tracing::info!(
        ingredient_id = ingredient.id,
        user_id = admin.user_id,
        "Ingredient created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: ingredient })))
}

/// PUT /api/v1/ingredients/{id}
pub async fn update_ingredient(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(ingredient_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateIngredient>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let ingredient = IngredientRepo::update(&state.pool, ingredient_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ingredient",
            id: ingredient_id,
        }))?;

    tracing::info!(ingredient_id, user_id = admin.user_id, "Ingredient updated");

    Ok(Json(DataResponse { data: ingredient }))
}

/// DELETE /api/v1/ingredients/{id}
pub async fn delete_ingredient(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(ingredient_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !IngredientRepo::delete(&state.pool, ingredient_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Ingredient",
            id: ingredient_id,
        }));
    }

    tracing::info!(ingredient_id, user_id = admin.user_id, "Ingredient deleted");

    Ok(StatusCode::NO_CONTENT)
}
