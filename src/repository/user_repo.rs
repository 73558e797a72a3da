//! User repository (数据库访问层)

use crate::{error::AppError, models::user::*};
use sqlx::PgPool;

pub struct UserRepository {
    db: PgPool,
}

impl UserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据邮箱查找用户
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    /// 根据 ID 查找用户
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    /// 创建用户
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    /// 更新用户资料
    pub async fn update(&self, id: i64, req: &UpdateUserRequest) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = $2,
                email = COALESCE($3, email),
                path_image_banner = COALESCE($4, path_image_banner),
                path_image_icon = COALESCE($5, path_image_icon),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.path_image_banner)
        .bind(&req.path_image_icon)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    /// 更新储蓄目标（meta 为 NULL 时清除目标）
    pub async fn update_meta(&self, id: i64, meta: Option<f64>) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET meta = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(meta)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 删除用户
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
