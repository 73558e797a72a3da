//! 用户管理的 HTTP 处理器
//!
//! 所有按 ID 的操作只允许访问自己的账户，其他 ID 一律按不存在处理。

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::user::*,
    repository::UserRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// 目标 ID 不是调用者自己的账户时按不存在处理，不泄露他人数据
fn ensure_own_account(auth_context: &AuthContext, id: i64) -> Result<(), AppError> {
    if auth_context.user_id != id {
        return Err(AppError::not_found("User"));
    }
    Ok(())
}

/// 列出用户（仅返回调用者自己的记录）
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(auth_context.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    let users: Vec<UserResponse> = vec![user.into()];

    Ok(Json(users))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_own_account(&auth_context, id)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok(Json(UserResponse::from(user)))
}

/// 更新用户资料
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_own_account(&auth_context, id)?;
    req.validate()?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok(Json(UserResponse::from(user)))
}

/// 更新储蓄目标
pub async fn update_user_meta(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserMetaRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_own_account(&auth_context, id)?;
    req.validate()?;

    let repo = UserRepository::new(state.db.clone());
    let updated = repo.update_meta(id, req.meta).await?;
    if !updated {
        return Err(AppError::not_found("User"));
    }

    Ok(Json(json!({ "message": "Meta updated" })))
}

/// 删除用户（硬删除）
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_own_account(&auth_context, id)?;

    let repo = UserRepository::new(state.db.clone());
    let deleted = repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found("User"));
    }

    Ok(StatusCode::NO_CONTENT)
}
