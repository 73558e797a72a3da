//! Investment repository (数据库访问层)

use crate::{error::AppError, models::investment::*};
use sqlx::PgPool;

pub struct InvestmentRepository {
    db: PgPool,
}

impl InvestmentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出用户的所有投资（附带分类名称）
    pub async fn list(&self, user_id: i64) -> Result<Vec<Investment>, AppError> {
        let investments = sqlx::query_as::<_, Investment>(
            r#"
            SELECT i.*, ic.name AS category_name
            FROM investments i
            JOIN investment_categories ic ON i.category_id = ic.id
            WHERE i.user_id = $1
            ORDER BY i.date DESC, i.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(investments)
    }

    /// 查找单笔投资
    pub async fn find(&self, user_id: i64, id: i64) -> Result<Option<Investment>, AppError> {
        let investment = sqlx::query_as::<_, Investment>(
            r#"
            SELECT i.*, ic.name AS category_name
            FROM investments i
            JOIN investment_categories ic ON i.category_id = ic.id
            WHERE i.id = $2 AND i.user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(investment)
    }

    /// 创建投资
    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateInvestmentRequest,
    ) -> Result<Investment, AppError> {
        let investment = sqlx::query_as::<_, Investment>(
            r#"
            WITH inserted AS (
                INSERT INTO investments
                    (user_id, category_id, date, description, amount, return_percentage)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT inserted.*, ic.name AS category_name
            FROM inserted
            JOIN investment_categories ic ON inserted.category_id = ic.id
            "#,
        )
        .bind(user_id)
        .bind(req.category_id)
        .bind(req.date)
        .bind(&req.description)
        .bind(req.amount)
        .bind(req.return_percentage)
        .fetch_one(&self.db)
        .await?;

        Ok(investment)
    }

    /// 部分更新投资，未提供的字段保持原值
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        req: &UpdateInvestmentRequest,
    ) -> Result<Option<Investment>, AppError> {
        let investment = sqlx::query_as::<_, Investment>(
            r#"
            WITH updated AS (
                UPDATE investments
                SET
                    category_id = COALESCE($3, category_id),
                    date = COALESCE($4, date),
                    description = COALESCE($5, description),
                    amount = COALESCE($6, amount),
                    return_percentage = COALESCE($7, return_percentage),
                    updated_at = NOW()
                WHERE id = $2 AND user_id = $1
                RETURNING *
            )
            SELECT updated.*, ic.name AS category_name
            FROM updated
            JOIN investment_categories ic ON updated.category_id = ic.id
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(req.category_id)
        .bind(req.date)
        .bind(&req.description)
        .bind(req.amount)
        .bind(req.return_percentage)
        .fetch_optional(&self.db)
        .await?;

        Ok(investment)
    }

    /// 删除投资
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM investments WHERE id = $2 AND user_id = $1")
            .bind(user_id)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
