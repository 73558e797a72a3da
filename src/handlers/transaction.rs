//! 交易管理的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::transaction::*,
    repository::TransactionRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 列出交易
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = TransactionRepository::new(state.db.clone());
    let transactions = repo.list(auth_context.user_id).await?;

    Ok(Json(transactions))
}

/// 获取交易详情
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = TransactionRepository::new(state.db.clone());
    let transaction = repo
        .find(auth_context.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Transaction"))?;

    Ok(Json(transaction))
}

/// 创建交易
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = TransactionRepository::new(state.db.clone());
    let transaction = repo.create(auth_context.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// 更新交易
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if req.is_empty() {
        return Err(AppError::bad_request("No fields to update"));
    }

    let repo = TransactionRepository::new(state.db.clone());
    let transaction = repo
        .update(auth_context.user_id, id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Transaction"))?;

    Ok(Json(transaction))
}

/// 删除交易
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = TransactionRepository::new(state.db.clone());
    let deleted = repo.delete(auth_context.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Transaction"));
    }

    Ok(StatusCode::NO_CONTENT)
}
