//! Handlers for `/recipes/{id}/favorite`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use foodgram_core::types::DbId;
use foodgram_db::models::relation::RecipeList;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::handlers::recipe_lists::{add_to_list, remove_from_list};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/recipes/{id}/favorite
pub async fn add_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    add_to_list(&state.pool, RecipeList::Favorites, &auth, recipe_id).await
}

/// DELETE /api/v1/recipes/{id}/favorite
pub async fn remove_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    remove_from_list(&state.pool, RecipeList::Favorites, &auth, recipe_id).await
}
