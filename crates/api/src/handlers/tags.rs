//! Handlers for the `/tags` catalog. Reads are public, writes admin only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use foodgram_core::error::CoreError;
use foodgram_core::types::DbId;
use foodgram_db::models::tag::{CreateTag, UpdateTag};
use foodgram_db::repositories::TagRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    AppPath(tag_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;
    Ok(Json(DataResponse { data: tag }))
}

/// POST /api/v1/tags
///
/// Create a tag. Slug must be unique (409 otherwise). Admin only.
pub async fn create_tag(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTag>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let tag = TagRepo::create(&state.pool, &input).await?;

    tracing::info!(tag_id = tag.id, slug = %tag.slug, user_id = admin.user_id, "Tag created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// PUT /api/v1/tags/{id}
pub async fn update_tag(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(tag_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let tag = TagRepo::update(&state.pool, tag_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;

    tracing::info!(tag_id, user_id = admin.user_id, "Tag updated");

    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /api/v1/tags/{id}
///
/// Delete a tag and its recipe links.
pub async fn delete_tag(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(tag_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !TagRepo::delete(&state.pool, tag_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }));
    }

    tracing::info!(tag_id, user_id = admin.user_id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}
