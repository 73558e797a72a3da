//! 交易分类管理的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::category::*,
    repository::CategoryRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 列出分类
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.list(auth_context.user_id).await?;

    Ok(Json(categories))
}

/// 获取分类详情
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find(auth_context.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Category"))?;

    Ok(Json(category))
}

/// 创建分类
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(auth_context.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// 更新分类
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if req.name.is_none() && req.category_type.is_none() {
        return Err(AppError::bad_request("No fields to update"));
    }

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .update(auth_context.user_id, id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Category"))?;

    Ok(Json(category))
}

/// 删除分类
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = CategoryRepository::new(state.db.clone());
    let deleted = repo.delete(auth_context.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Category"));
    }

    Ok(StatusCode::NO_CONTENT)
}
