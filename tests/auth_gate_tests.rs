//! 请求认证门集成测试
//!
//! 不依赖数据库：用一个最小路由验证四种拒绝原因和放行路径

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use finance_system::auth::jwt::{Claims, JwtService};
use finance_system::auth::middleware::{jwt_auth_middleware, AuthContext};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

const TEST_ACCESS_SECRET: &str = "test-access-secret-for-testing-min-32-chars";

async fn whoami(auth_context: AuthContext) -> Json<serde_json::Value> {
    Json(json!({
        "userId": auth_context.user_id,
        "email": auth_context.email,
    }))
}

fn test_router() -> Router {
    let jwt_service = Arc::new(
        JwtService::from_config(&common::create_test_config()).expect("JWT service should build"),
    );

    Router::new()
        .route("/protected", get(whoami))
        .layer(axum::middleware::from_fn_with_state(
            jwt_service,
            jwt_auth_middleware,
        ))
}

async fn send(app: Router, auth_header: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri("/protected");
    if let Some(value) = auth_header {
        builder = builder.header("authorization", value);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn encode_access_claims(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let (status, body) = send(test_router(), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "No token provided");
}

#[tokio::test]
async fn test_malformed_header_is_rejected() {
    let (status, body) = send(test_router(), Some("Basic dXNlcjpwYXNz")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token format");
}

#[tokio::test]
async fn test_empty_bearer_token_is_rejected() {
    let (status, body) = send(test_router(), Some("Bearer ")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "No token provided");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let (status, body) = send(test_router(), Some("Bearer not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_wrong_secret_token_is_rejected() {
    let now = Utc::now().timestamp();
    let forged = encode_access_claims(
        &Claims {
            sub: "1".to_string(),
            email: "a@b.com".to_string(),
            token_type: "access".to_string(),
            iat: now,
            exp: now + 600,
        },
        "another-secret-that-is-32-characters!",
    );

    let (status, body) = send(test_router(), Some(&format!("Bearer {}", forged))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_token_without_identity_is_rejected() {
    // 签名有效但身份字段缺失
    let now = Utc::now().timestamp();
    let token = encode_access_claims(
        &Claims {
            sub: String::new(),
            email: String::new(),
            token_type: "access".to_string(),
            iat: now,
            exp: now + 600,
        },
        TEST_ACCESS_SECRET,
    );

    let (status, body) = send(test_router(), Some(&format!("Bearer {}", token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token payload");
}

#[tokio::test]
async fn test_refresh_token_is_rejected_on_protected_route() {
    let jwt_service =
        JwtService::from_config(&common::create_test_config()).expect("JWT service should build");
    let refresh = jwt_service.generate_refresh_token(1, "a@b.com").unwrap();

    let (status, body) = send(test_router(), Some(&format!("Bearer {}", refresh))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_valid_token_attaches_identity() {
    let jwt_service =
        JwtService::from_config(&common::create_test_config()).expect("JWT service should build");
    let token = jwt_service.generate_access_token(42, "a@b.com").unwrap();

    let (status, body) = send(test_router(), Some(&format!("Bearer {}", token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], 42);
    assert_eq!(body["email"], "a@b.com");
}
