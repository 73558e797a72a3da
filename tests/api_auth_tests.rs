//! 认证 API 集成测试
//!
//! 需要运行中的 PostgreSQL（TEST_DATABASE_URL），因此全部标记 ignore

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serial_test::serial;
use tower::ServiceExt;

mod common;

async fn test_app() -> Router {
    let config = common::create_test_config();
    let pool = common::setup_test_db(&config).await;
    let state = common::create_test_app_state(pool).await;
    finance_system::routes::create_router(state)
}

async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
#[serial]
#[ignore] // 需要数据库
async fn test_register_returns_user_and_token_pair() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "A", "email": "a@b.com", "password": "12345678"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "a@b.com");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["refreshToken"].as_str().unwrap().is_empty());

    // 令牌必须能解码出正确身份
    let jwt = finance_system::auth::jwt::JwtService::from_config(&common::create_test_config())
        .unwrap();
    let claims = jwt
        .validate_access_token(body["accessToken"].as_str().unwrap())
        .unwrap();
    let (user_id, email) = claims.identity().unwrap();
    assert_eq!(email, "a@b.com");
    assert_eq!(user_id, body["user"]["id"].as_i64().unwrap());
}

#[tokio::test]
#[serial]
#[ignore] // 需要数据库
async fn test_register_duplicate_email_fails() {
    let app = test_app().await;

    let payload =
        serde_json::json!({"name": "Dup", "email": "dup@b.com", "password": "12345678"});

    let (first, _) = post_json(&app, "/api/auth/register", payload.clone()).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = post_json(&app, "/api/auth/register", payload).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already exists");
}

#[tokio::test]
#[serial]
#[ignore] // 需要数据库
async fn test_register_validation_errors() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "", "email": "bad", "password": "short"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
#[serial]
#[ignore] // 需要数据库
async fn test_login_wrong_password_always_fails() {
    let app = test_app().await;

    post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "X", "email": "x@x.com", "password": "correct-pass"}),
    )
    .await;

    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": "x@x.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 不存在的邮箱同样不可能登录成功
    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": "ghost@x.com", "password": "whatever1"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 正确口令可以登录
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        serde_json::json!({"email": "x@x.com", "password": "correct-pass"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "x@x.com");
}

#[tokio::test]
#[serial]
#[ignore] // 需要数据库
async fn test_refresh_token_flow() {
    let app = test_app().await;

    let (_, registered) = post_json(
        &app,
        "/api/auth/register",
        serde_json::json!({"name": "R", "email": "r@b.com", "password": "12345678"}),
    )
    .await;

    let refresh_token = registered["refreshToken"].as_str().unwrap().to_string();

    let (status, body) = post_json(
        &app,
        "/api/auth/refresh-token",
        serde_json::json!({"refreshToken": refresh_token}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    // 新访问令牌携带相同身份
    let jwt = finance_system::auth::jwt::JwtService::from_config(&common::create_test_config())
        .unwrap();
    let claims = jwt
        .validate_access_token(body["accessToken"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.email, "r@b.com");

    // 伪造的刷新令牌被拒绝
    let (status, _) = post_json(
        &app,
        "/api/auth/refresh-token",
        serde_json::json!({"refreshToken": "forged.token.value"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
