//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use foodgram_api::auth::jwt::{generate_access_token, JwtConfig};
use foodgram_api::auth::password::hash_password;
use foodgram_api::config::ServerConfig;
use foodgram_api::router::build_app_router;
use foodgram_api::state::AppState;
use foodgram_core::types::DbId;
use foodgram_db::models::ingredient::CreateIngredient;
use foodgram_db::models::tag::CreateTag;
use foodgram_db::models::user::{CreateUser, User};
use foodgram_db::repositories::{IngredientRepo, TagRepo, UserRepo};

pub const TEST_PASSWORD: &str = "test_password_123!";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        page_size: 6,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] directly into the database.
pub async fn create_user(pool: &PgPool, username: &str, is_admin: bool) -> User {
    let input = CreateUser {
        email: format!("{username}@test.com"),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        is_admin,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Sign an access token for a user without going through login.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, user.role(), &test_jwt_config()).expect("token should sign")
}

pub async fn create_tag(pool: &PgPool, slug: &str) -> DbId {
    let input = CreateTag {
        name: slug.to_string(),
        color: "#49B64E".to_string(),
        slug: slug.to_string(),
    };
    TagRepo::create(pool, &input).await.unwrap().id
}

pub async fn create_ingredient(pool: &PgPool, name: &str, unit: &str) -> DbId {
    let input = CreateIngredient {
        name: name.to_string(),
        measurement_unit: unit.to_string(),
    };
    IngredientRepo::create(pool, &input).await.unwrap().id
}

/// JSON body for `POST /recipes`.
pub fn recipe_body(name: &str, tags: &[DbId], lines: &[(DbId, i32)]) -> serde_json::Value {
    let ingredients: Vec<serde_json::Value> = lines
        .iter()
        .map(|&(id, amount)| serde_json::json!({ "id": id, "amount": amount }))
        .collect();
    serde_json::json!({
        "tags": tags,
        "ingredients": ingredients,
        "name": name,
        "text": format!("How to make {name}"),
        "cooking_time": 15,
    })
}

/// Create a recipe through the API and return its id.
pub async fn create_recipe_via_api(
    app: Router,
    token: &str,
    name: &str,
    tags: &[DbId],
    lines: &[(DbId, i32)],
) -> DbId {
    let response =
        post_json_auth(app, "/api/v1/recipes", recipe_body(name, tags, lines), token).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}
