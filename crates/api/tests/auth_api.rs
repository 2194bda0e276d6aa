//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_user_and_returns_public_info(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ana@trailhead.test",
        "password": "a-long-enough-password"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "ana@trailhead.test");
    assert!(json["id"].is_number());
    // The password hash must never appear in a response.
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "email": "ana@trailhead.test", "password": "short" });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Password must be at least 8 characters long"
    );

    // No user row was created.
    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "not-an-email", "password": "a-long-enough-password" });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ana@trailhead.test",
        "password": "a-long-enough-password"
    });
    let response = post_json(app.clone(), "/api/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_access_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ana@trailhead.test",
        "password": "a-long-enough-password"
    });
    post_json(app.clone(), "/api/auth/register", body.clone()).await;

    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["accessToken"].is_string());
    assert!(json["expiresIn"].is_number());
    assert_eq!(json["user"]["email"], "ana@trailhead.test");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ana@trailhead.test",
        "password": "a-long-enough-password"
    });
    post_json(app.clone(), "/api/auth/register", body).await;

    let body = serde_json::json!({ "email": "ana@trailhead.test", "password": "wrong-password" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_email_gives_same_error_as_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@trailhead.test", "password": "whatever-long" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}
