pub mod auth;
pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod tags;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/token/login                                login (public)
/// /auth/token/refresh                              refresh (public)
/// /auth/token/logout                               logout (requires auth)
///
/// /users                                           list, sign up
/// /users/me                                        current user
/// /users/set_password                              change password
/// /users/subscriptions                             followed authors
/// /users/{id}                                      profile
/// /users/{id}/subscribe                            follow, unfollow
///
/// /tags                                            list, create (admin)
/// /tags/{id}                                       get, update, delete (admin)
///
/// /ingredients                                     list (?name=), create (admin)
/// /ingredients/{id}                                get, update, delete (admin)
///
/// /recipes                                         list, create
/// /recipes/download_shopping_cart                  shopping list export
/// /recipes/{id}                                    get, update, delete
/// /recipes/{id}/favorite                           add, remove
/// /recipes/{id}/shopping_cart                      add, remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth/token", auth::router())
        .nest("/users", users::router())
        .nest("/tags", tags::router())
        .nest("/ingredients", ingredients::router())
        .nest("/recipes", recipes::router())
}
