//! Transaction category repository (数据库访问层)

use crate::{error::AppError, models::category::*};
use sqlx::PgPool;

pub struct CategoryRepository {
    db: PgPool,
}

impl CategoryRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出用户的所有分类
    pub async fn list(&self, user_id: i64) -> Result<Vec<TransactionCategory>, AppError> {
        let categories = sqlx::query_as::<_, TransactionCategory>(
            "SELECT * FROM transaction_categories WHERE user_id = $1 ORDER BY name",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(categories)
    }

    /// 查找单个分类
    pub async fn find(
        &self,
        user_id: i64,
        id: i64,
    ) -> Result<Option<TransactionCategory>, AppError> {
        let category = sqlx::query_as::<_, TransactionCategory>(
            "SELECT * FROM transaction_categories WHERE id = $2 AND user_id = $1",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(category)
    }

    /// 创建分类
    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateCategoryRequest,
    ) -> Result<TransactionCategory, AppError> {
        let category = sqlx::query_as::<_, TransactionCategory>(
            r#"
            INSERT INTO transaction_categories (user_id, name, type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.category_type)
        .fetch_one(&self.db)
        .await?;

        Ok(category)
    }

    /// 部分更新分类
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        req: &UpdateCategoryRequest,
    ) -> Result<Option<TransactionCategory>, AppError> {
        let category = sqlx::query_as::<_, TransactionCategory>(
            r#"
            UPDATE transaction_categories
            SET
                name = COALESCE($3, name),
                type = COALESCE($4, type),
                updated_at = NOW()
            WHERE id = $2 AND user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(&req.name)
        .bind(&req.category_type)
        .fetch_optional(&self.db)
        .await?;

        Ok(category)
    }

    /// 删除分类
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM transaction_categories WHERE id = $2 AND user_id = $1")
                .bind(user_id)
                .bind(id)
                .execute(&self.db)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
