//! 认证相关的 HTTP 处理器

use crate::{error::AppError, middleware::AppState, models::auth::*};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

/// 注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let response = state.auth_service.register(req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// 刷新访问令牌
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let response = state.auth_service.refresh(req)?;

    Ok(Json(response))
}
