//! Handlers for the shopping cart and its plain-text export.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use foodgram_core::shopping_list::{render_shopping_list, SHOPPING_LIST_FILENAME};
use foodgram_core::types::DbId;
use foodgram_db::models::relation::RecipeList;
use foodgram_db::repositories::ShoppingCartRepo;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::handlers::recipe_lists::{add_to_list, remove_from_list};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/recipes/{id}/shopping_cart
pub async fn add_to_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    add_to_list(&state.pool, RecipeList::ShoppingCart, &auth, recipe_id).await
}

/// DELETE /api/v1/recipes/{id}/shopping_cart
pub async fn remove_from_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(recipe_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    remove_from_list(&state.pool, RecipeList::ShoppingCart, &auth, recipe_id).await
}

/// GET /api/v1/recipes/download_shopping_cart
///
/// Aggregated ingredient list of every recipe in the caller's cart, as a
/// `text/plain` attachment. An empty cart gives an empty body.
pub async fn download_shopping_cart(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let entries = ShoppingCartRepo::shopping_list(&state.pool, auth.user_id).await?;
    let body = render_shopping_list(&entries);

    tracing::info!(
        user_id = auth.user_id,
        entries = entries.len(),
        "Shopping list exported"
    );

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{SHOPPING_LIST_FILENAME}\""),
            ),
        ],
        body,
    ))
}
