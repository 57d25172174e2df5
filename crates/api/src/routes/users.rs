//! Route definitions for the `/users` resource, including subscriptions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{subscriptions, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                -> list_users
/// POST   /                -> sign_up
/// GET    /me              -> me
/// POST   /set_password    -> set_password
/// GET    /subscriptions   -> list_subscriptions
/// GET    /{id}            -> get_user
/// POST   /{id}/subscribe  -> subscribe
/// DELETE /{id}/subscribe  -> unsubscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::sign_up))
        .route("/me", get(users::me))
        .route("/set_password", post(users::set_password))
        .route("/subscriptions", get(subscriptions::list_subscriptions))
        .route("/{id}", get(users::get_user))
        .route(
            "/{id}/subscribe",
            post(subscriptions::subscribe).delete(subscriptions::unsubscribe),
        )
}
