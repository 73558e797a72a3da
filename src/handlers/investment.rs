//! 投资管理的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::investment::*,
    repository::InvestmentRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 列出投资
pub async fn list_investments(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = InvestmentRepository::new(state.db.clone());
    let investments = repo.list(auth_context.user_id).await?;

    Ok(Json(investments))
}

/// 获取投资详情
pub async fn get_investment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = InvestmentRepository::new(state.db.clone());
    let investment = repo
        .find(auth_context.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Investment"))?;

    Ok(Json(investment))
}

/// 创建投资
pub async fn create_investment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateInvestmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = InvestmentRepository::new(state.db.clone());
    let investment = repo.create(auth_context.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(investment)))
}

/// 更新投资
pub async fn update_investment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInvestmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if req.is_empty() {
        return Err(AppError::bad_request("No fields to update"));
    }

    let repo = InvestmentRepository::new(state.db.clone());
    let investment = repo
        .update(auth_context.user_id, id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Investment"))?;

    Ok(Json(investment))
}

/// 删除投资
pub async fn delete_investment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = InvestmentRepository::new(state.db.clone());
    let deleted = repo.delete(auth_context.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Investment"));
    }

    Ok(StatusCode::NO_CONTENT)
}
