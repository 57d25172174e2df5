//! Route definitions for the `/ingredients` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::ingredients;
use crate::state::AppState;

/// Routes mounted at `/ingredients`.
///
/// ```text
/// GET    /      -> list_ingredients (?name= prefix)
/// POST   /      -> create_ingredient (admin)
/// GET    /{id}  -> get_ingredient
/// PUT    /{id}  -> update_ingredient (admin)
/// DELETE /{id}  -> delete_ingredient (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(ingredients::list_ingredients).post(ingredients::create_ingredient),
        )
        .route(
            "/{id}",
            get(ingredients::get_ingredient)
                .put(ingredients::update_ingredient)
                .delete(ingredients::delete_ingredient),
        )
}
