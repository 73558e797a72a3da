//! JWT 认证中间件
//!
//! 每个请求经过的状态机: 无令牌 → 格式错误 → 验证失败 → 载荷缺失 → 通过。
//! 四种拒绝原因均返回 401，互相可区分。

use crate::{auth::jwt::JwtService, error::AppError};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i64,
    pub email: String,
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// 从 Authorization 头提取令牌
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("No token provided"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid token format"))?;

    if token.is_empty() {
        return Err(AppError::authentication("No token provided"));
    }

    Ok(token.to_string())
}

/// JWT 认证中间件 - 保护路由必须通过
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从 Authorization 头提取令牌
    let token = extract_token(req.headers())?;

    // 验证签名、过期时间和令牌类型
    let claims = jwt_service
        .validate_access_token(&token)
        .map_err(|_| AppError::authentication("Invalid token"))?;

    // 校验身份字段齐全
    let (user_id, email) = claims.identity()?;

    // 附加到请求扩展
    req.extensions_mut().insert(AuthContext { user_id, email });

    Ok(next.run(req).await)
}
