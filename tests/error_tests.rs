//! 错误模型单元测试
//!
//! 验证状态码映射和错误响应体格式

use axum::response::IntoResponse;
use finance_system::error::AppError;
use http_body_util::BodyExt;

async fn response_body(error: AppError) -> (u16, serde_json::Value) {
    let response = error.into_response();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[test]
fn test_status_code_mapping() {
    assert_eq!(AppError::Unauthorized.code(), 401);
    assert_eq!(AppError::authentication("Invalid token").code(), 401);
    assert_eq!(AppError::DuplicateEmail.code(), 409);
    assert_eq!(AppError::not_found("Note").code(), 404);
    assert_eq!(AppError::bad_request("bad").code(), 400);
    assert_eq!(AppError::Config("missing".to_string()).code(), 500);
    assert_eq!(AppError::internal("boom").code(), 500);
    assert_eq!(AppError::Database(sqlx::Error::RowNotFound).code(), 500);
}

#[tokio::test]
async fn test_error_response_shape() {
    let (status, body) = response_body(AppError::not_found("Transaction")).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], 404);
    assert_eq!(body["error"]["message"], "Transaction not found");
    assert!(body["error"]["request_id"].is_string());
    // 非验证错误不携带字段错误列表
    assert!(body["error"].get("errors").is_none());
}

#[tokio::test]
async fn test_database_error_is_generic() {
    let (status, body) = response_body(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, 500);
    assert_eq!(body["error"]["message"], "Database error occurred");
}

#[tokio::test]
async fn test_duplicate_email_response() {
    let (status, body) = response_body(AppError::DuplicateEmail).await;

    assert_eq!(status, 409);
    assert_eq!(body["error"]["message"], "Email already exists");
}

#[tokio::test]
async fn test_validation_error_lists_fields() {
    use finance_system::models::auth::RegisterRequest;
    use validator::Validate;

    let invalid = RegisterRequest {
        name: "".to_string(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
    };
    let errors = invalid.validate().unwrap_err();

    let (status, body) = response_body(AppError::Validation(errors)).await;

    assert_eq!(status, 400);
    let fields = body["error"]["errors"].as_array().unwrap();
    assert_eq!(fields.len(), 3);

    let named: Vec<&str> = fields
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert!(named.contains(&"name"));
    assert!(named.contains(&"email"));
    assert!(named.contains(&"password"));
}
