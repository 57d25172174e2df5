//! Route definitions for the `/recipes` resource and its per-user lists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{favorites, recipes, shopping_cart};
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /                         -> list_recipes
/// POST   /                         -> create_recipe
/// GET    /download_shopping_cart   -> download_shopping_cart
/// GET    /{id}                     -> get_recipe
/// PUT    /{id}                     -> update_recipe
/// PATCH  /{id}                     -> update_recipe
/// DELETE /{id}                     -> delete_recipe
/// POST   /{id}/favorite            -> add_favorite
/// DELETE /{id}/favorite            -> remove_favorite
/// POST   /{id}/shopping_cart       -> add_to_cart
/// DELETE /{id}/shopping_cart       -> remove_from_cart
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes).post(recipes::create_recipe))
        .route(
            "/download_shopping_cart",
            get(shopping_cart::download_shopping_cart),
        )
        .route(
            "/{id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .patch(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route(
            "/{id}/favorite",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route(
            "/{id}/shopping_cart",
            post(shopping_cart::add_to_cart).delete(shopping_cart::remove_from_cart),
        )
}
