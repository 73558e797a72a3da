//! 认证服务：注册、登录、令牌刷新

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    error::AppError,
    models::auth::*,
    repository::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self { db, jwt_service }
    }

    /// 用户注册
    ///
    /// 邮箱唯一性预检失败返回 DuplicateEmail；成功时插入一行并
    /// 返回脱敏用户信息和一对新令牌。
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        // 邮箱唯一性检查
        if user_repo.find_by_email(&req.email).await?.is_some() {
            tracing::warn!(email = %req.email, "Register rejected: email already exists");
            return Err(AppError::DuplicateEmail);
        }

        // 哈希密码（随机盐嵌入 PHC 字符串）
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(&req.password)?;

        let user = user_repo.create(&req.name, &req.email, &password_hash).await?;

        tracing::info!(user_id = user.id, email = %user.email, "User registered");

        let token_pair = self.jwt_service.generate_token_pair(user.id, &user.email)?;

        Ok(AuthResponse {
            user: user.into(),
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
        })
    }

    /// 用户登录
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        let user = user_repo
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))?;

        // 验证密码
        let hasher = PasswordHasher::new();
        hasher
            .verify(&req.password, &user.password_hash)
            .map_err(|_| AppError::authentication("Invalid credentials"))?;

        tracing::info!(user_id = user.id, "User logged in");

        let token_pair = self.jwt_service.generate_token_pair(user.id, &user.email)?;

        Ok(AuthResponse {
            user: user.into(),
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
        })
    }

    /// 刷新访问令牌
    ///
    /// 完全无状态：只验证刷新令牌本身，不查库、不轮换刷新令牌，
    /// 新的访问令牌携带与刷新令牌相同的身份。
    pub fn refresh(&self, req: RefreshTokenRequest) -> Result<RefreshResponse, AppError> {
        let claims = self
            .jwt_service
            .validate_refresh_token(&req.refresh_token)
            .map_err(|_| AppError::authentication("Invalid refresh token"))?;

        let (user_id, email) = claims
            .identity()
            .map_err(|_| AppError::authentication("Invalid refresh token"))?;

        let access_token = self.jwt_service.generate_access_token(user_id, &email)?;

        Ok(RefreshResponse { access_token })
    }
}
