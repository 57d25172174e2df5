//! Handlers for the `/users` resource: sign-up, profiles, password change.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use foodgram_core::error::CoreError;
use foodgram_core::types::DbId;
use foodgram_core::users::{MAX_EMAIL_LEN, MAX_NAME_LEN};
use foodgram_db::models::user::{CreateUser, UserResponse};
use foodgram_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email, length(max = MAX_EMAIL_LEN))]
    pub email: String,
    #[validate(
        length(min = 1, max = MAX_NAME_LEN),
        custom(function = "foodgram_core::users::validate_username")
    )]
    pub username: String,
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub first_name: String,
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub last_name: String,
    pub password: String,
}

/// Request body for `POST /users/set_password`.
#[derive(Debug, Deserialize)]
pub struct SetPasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/v1/users
///
/// Register a new account. Email and username must be unique (409 otherwise).
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignUpRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_password_strength(&input.password)?;

    let email = input.email.trim().to_string();
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            is_admin: false,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// GET /api/v1/users
///
/// Paginated list of active users, each with `is_subscribed` for the viewer.
pub async fn list_users(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.resolve(state.config.page_size);

    let users = UserRepo::list_profiles(&state.pool, viewer.viewer_id(), limit, offset).await?;
    let count = UserRepo::count_active(&state.pool).await?;

    Ok(Json(PageResponse {
        data: users,
        count,
        limit,
        offset,
    }))
}

/// GET /api/v1/users/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = UserRepo::find_profile(&state.pool, auth.user_id, Some(auth.user_id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = UserRepo::find_profile(&state.pool, user_id, viewer.viewer_id())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/users/set_password
///
/// Change the caller's password. Requires the current password.
pub async fn set_password(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<SetPasswordRequest>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let current_ok = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_ok {
        return Err(AppError::Core(CoreError::Validation(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)?;
    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;
    tracing::info!(user_id = user.id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}
