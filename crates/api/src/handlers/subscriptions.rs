//! Handlers for subscriptions (user -> author follows).

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use foodgram_core::error::CoreError;
use foodgram_core::pagination::{clamp_limit, DEFAULT_RECIPES_LIMIT, MAX_RECIPES_LIMIT};
use foodgram_core::relation::{
    require_created, require_removed, validate_follow_target, RelationKind,
};
use foodgram_core::types::DbId;
use foodgram_db::models::recipe::RecipeShort;
use foodgram_db::models::relation::Subscription;
use foodgram_db::models::user::UserProfile;
use foodgram_db::repositories::{FollowRepo, RecipeRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::SubscriptionParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/users/subscriptions
///
/// Authors the caller follows, each with up to `recipes_limit` newest recipes
/// and their total `recipes_count`.
pub async fn list_subscriptions(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SubscriptionParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.page().resolve(state.config.page_size);
    let recipes_limit = clamp_limit(params.recipes_limit, DEFAULT_RECIPES_LIMIT, MAX_RECIPES_LIMIT);

    let authors = FollowRepo::list_authors(&state.pool, auth.user_id, limit, offset).await?;
    let count = FollowRepo::count_authors(&state.pool, auth.user_id).await?;
    let data = with_recipes(&state.pool, authors, recipes_limit).await?;

    Ok(Json(PageResponse {
        data,
        count,
        limit,
        offset,
    }))
}

/// POST /api/v1/users/{id}/subscribe
///
/// Follow an author. 404 if the author does not exist, 400 on self-follow or
/// when already subscribed.
pub async fn subscribe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(author_id): AppPath<DbId>,
    AppQuery(params): AppQuery<SubscriptionParams>,
) -> AppResult<impl IntoResponse> {
    let author = UserRepo::find_profile(&state.pool, author_id, Some(auth.user_id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: author_id,
        }))?;
    validate_follow_target(auth.user_id, author_id)?;

    let outcome = FollowRepo::add(&state.pool, auth.user_id, author_id).await?;
    require_created(outcome, RelationKind::Follow, author_id)?;

    tracing::info!(user_id = auth.user_id, author_id, "Subscribed to author");

    let recipes_limit = clamp_limit(params.recipes_limit, DEFAULT_RECIPES_LIMIT, MAX_RECIPES_LIMIT);
    let author = UserProfile {
        is_subscribed: true,
        ..author
    };
    let mut data = with_recipes(&state.pool, vec![author], recipes_limit).await?;
    let subscription = data.pop().ok_or_else(|| {
        AppError::InternalError(format!("Subscription for author {author_id} vanished"))
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: subscription })))
}

/// DELETE /api/v1/users/{id}/subscribe
pub async fn unsubscribe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(author_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::find_by_id(&state.pool, author_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: author_id,
        }));
    }

    let outcome = FollowRepo::remove(&state.pool, auth.user_id, author_id).await?;
    require_removed(outcome, RelationKind::Follow, author_id)?;

    tracing::info!(user_id = auth.user_id, author_id, "Unsubscribed from author");

    Ok(StatusCode::NO_CONTENT)
}

/// Attach recipe previews and counts to author profiles, preserving order.
async fn with_recipes(
    pool: &PgPool,
    authors: Vec<UserProfile>,
    recipes_limit: i64,
) -> AppResult<Vec<Subscription>> {
    let author_ids: Vec<DbId> = authors.iter().map(|a| a.id).collect();

    let mut recipes: HashMap<DbId, Vec<RecipeShort>> = HashMap::new();
    for row in RecipeRepo::short_by_authors(pool, &author_ids, recipes_limit).await? {
        recipes.entry(row.author_id).or_default().push(row.into());
    }
    let counts: HashMap<DbId, i64> = RecipeRepo::count_by_authors(pool, &author_ids)
        .await?
        .into_iter()
        .collect();

    Ok(authors
        .into_iter()
        .map(|author| Subscription {
            recipes: recipes.remove(&author.id).unwrap_or_default(),
            recipes_count: counts.get(&author.id).copied().unwrap_or(0),
            author,
        })
        .collect())
}
