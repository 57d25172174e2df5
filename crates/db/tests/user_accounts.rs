//! Integration tests for user rows and refresh sessions.

use chrono::{Duration, Utc};
use foodgram_db::models::session::CreateSession;
use foodgram_db::models::user::CreateUser;
use foodgram_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

fn new_user(email: &str, username: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        is_admin: false,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_uniqueness_ignores_case(pool: PgPool) {
    UserRepo::create(&pool, &new_user("Alice@x.com", "alice"))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("alice@X.COM", "alice2"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_email_lower"));

    let found = UserRepo::find_by_email(&pool, "ALICE@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.username, "alice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_session_is_consumed_once(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("bob@x.com", "bob"))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "hash-1".to_string(),
            expires_at: Utc::now() + Duration::days(1),
        },
    )
    .await
    .unwrap();

    let first = SessionRepo::consume_refresh_token(&pool, "hash-1")
        .await
        .unwrap();
    assert_eq!(first.map(|s| s.user_id), Some(user.id));

    let second = SessionRepo::consume_refresh_token(&pool, "hash-1")
        .await
        .unwrap();
    assert!(second.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_refresh_session_is_not_consumed(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol@x.com", "carol"))
        .await
        .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "stale".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
        },
    )
    .await
    .unwrap();

    let consumed = SessionRepo::consume_refresh_token(&pool, "stale")
        .await
        .unwrap();
    assert!(consumed.is_none());
}
