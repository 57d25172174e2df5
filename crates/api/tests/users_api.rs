//! Integration tests for the `/users` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_user, get, get_auth, post_json, post_json_auth, token_for,
    TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

fn signup_body(username: &str, email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "username": username,
        "first_name": "Ivan",
        "last_name": "Petrov",
        "password": "long-enough-password",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sign_up_returns_201_without_password(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/users", signup_body("ivan", "ivan@test.com")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "ivan");
    assert_eq!(json["data"]["email"], "ivan@test.com");
    assert!(json["data"].get("password").is_none());
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/users", signup_body("first", "dup@test.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = build_test_app(pool);
    let second = post_json(app, "/api/v1/users", signup_body("second", "dup@test.com")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/v1/users", signup_body("taken", "a@test.com")).await;

    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/users", signup_body("taken", "b@test.com")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reserved_username_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/users", signup_body("me", "me@test.com")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_password_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let mut body = signup_body("shorty", "shorty@test.com");
    body["password"] = json!("short");
    let response = post_json(app, "/api/v1/users", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_own_profile(pool: PgPool) {
    let user = create_user(&pool, "myself", false).await;
    let app = build_test_app(pool);

    let response = get_auth(app, "/api/v1/users/me", &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["is_subscribed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_users_is_paginated(pool: PgPool) {
    for i in 0..8 {
        create_user(&pool, &format!("user{i}"), false).await;
    }
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/users?limit=3&offset=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 8);
    assert_eq!(json["limit"], 3);
    assert_eq!(json["offset"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"][0]["username"], "user2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_users_defaults_to_configured_page_size(pool: PgPool) {
    for i in 0..8 {
        create_user(&pool, &format!("member{i}"), false).await;
    }
    let app = build_test_app(pool);

    let json = body_json(get(app, "/api/v1/users").await).await;
    assert_eq!(json["limit"], 6);
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/users/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_password_changes_login_password(pool: PgPool) {
    let user = create_user(&pool, "changer", false).await;
    let token = token_for(&user);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/users/set_password",
        json!({ "current_password": TEST_PASSWORD, "new_password": "brand-new-secret" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let old = post_json(
        app,
        "/api/v1/auth/token/login",
        json!({ "email": "changer@test.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    let app = build_test_app(pool);
    let new = post_json(
        app,
        "/api/v1/auth/token/login",
        json!({ "email": "changer@test.com", "password": "brand-new-secret" }),
    )
    .await;
    assert_eq!(new.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_password_with_wrong_current_returns_400(pool: PgPool) {
    let user = create_user(&pool, "forgetful", false).await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/users/set_password",
        json!({ "current_password": "not-my-password", "new_password": "brand-new-secret" }),
        &token_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_differing_only_by_case_returns_409(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/users", signup_body("alice", "Alice@x.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let second = post_json(app, "/api/v1/users", signup_body("alice2", "alice@x.com")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlong_first_name_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let mut body = signup_body("verbose", "verbose@test.com");
    body["first_name"] = json!("n".repeat(151));
    let response = post_json(app, "/api/v1/users", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
