//! 固定账单管理的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::fixed_account::*,
    repository::FixedAccountRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 列出固定账单
pub async fn list_fixed_accounts(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = FixedAccountRepository::new(state.db.clone());
    let accounts = repo.list(auth_context.user_id).await?;

    Ok(Json(accounts))
}

/// 获取固定账单详情
pub async fn get_fixed_account(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = FixedAccountRepository::new(state.db.clone());
    let account = repo
        .find(auth_context.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Fixed account"))?;

    Ok(Json(account))
}

/// 创建固定账单
pub async fn create_fixed_account(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateFixedAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = FixedAccountRepository::new(state.db.clone());
    let account = repo.create(auth_context.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// 更新固定账单
pub async fn update_fixed_account(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFixedAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if req.is_empty() {
        return Err(AppError::bad_request("No fields to update"));
    }

    let repo = FixedAccountRepository::new(state.db.clone());
    let account = repo
        .update(auth_context.user_id, id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Fixed account"))?;

    Ok(Json(account))
}

/// 删除固定账单
pub async fn delete_fixed_account(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = FixedAccountRepository::new(state.db.clone());
    let deleted = repo.delete(auth_context.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Fixed account"));
    }

    Ok(StatusCode::NO_CONTENT)
}
