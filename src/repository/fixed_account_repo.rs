//! Fixed account repository (数据库访问层)

use crate::{error::AppError, models::fixed_account::*};
use sqlx::PgPool;

pub struct FixedAccountRepository {
    db: PgPool,
}

impl FixedAccountRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出用户的所有固定账单（附带分类名称）
    pub async fn list(&self, user_id: i64) -> Result<Vec<FixedAccount>, AppError> {
        let accounts = sqlx::query_as::<_, FixedAccount>(
            r#"
            SELECT fa.*, fac.name AS category_name
            FROM fixed_accounts fa
            JOIN fixed_account_categories fac ON fa.category_id = fac.id
            WHERE fa.user_id = $1
            ORDER BY fa.due_date ASC, fa.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(accounts)
    }

    /// 查找单个固定账单
    pub async fn find(&self, user_id: i64, id: i64) -> Result<Option<FixedAccount>, AppError> {
        let account = sqlx::query_as::<_, FixedAccount>(
            r#"
            SELECT fa.*, fac.name AS category_name
            FROM fixed_accounts fa
            JOIN fixed_account_categories fac ON fa.category_id = fac.id
            WHERE fa.id = $2 AND fa.user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    /// 创建固定账单
    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateFixedAccountRequest,
    ) -> Result<FixedAccount, AppError> {
        let account = sqlx::query_as::<_, FixedAccount>(
            r#"
            WITH inserted AS (
                INSERT INTO fixed_accounts (user_id, category_id, description, amount, due_date)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
            )
            SELECT inserted.*, fac.name AS category_name
            FROM inserted
            JOIN fixed_account_categories fac ON inserted.category_id = fac.id
            "#,
        )
        .bind(user_id)
        .bind(req.category_id)
        .bind(&req.description)
        .bind(req.amount)
        .bind(req.due_date)
        .fetch_one(&self.db)
        .await?;

        Ok(account)
    }

    /// 部分更新固定账单，未提供的字段保持原值
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        req: &UpdateFixedAccountRequest,
    ) -> Result<Option<FixedAccount>, AppError> {
        let account = sqlx::query_as::<_, FixedAccount>(
            r#"
            WITH updated AS (
                UPDATE fixed_accounts
                SET
                    category_id = COALESCE($3, category_id),
                    description = COALESCE($4, description),
                    amount = COALESCE($5, amount),
                    due_date = COALESCE($6, due_date),
                    updated_at = NOW()
                WHERE id = $2 AND user_id = $1
                RETURNING *
            )
            SELECT updated.*, fac.name AS category_name
            FROM updated
            JOIN fixed_account_categories fac ON updated.category_id = fac.id
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(req.category_id)
        .bind(&req.description)
        .bind(req.amount)
        .bind(req.due_date)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    /// 删除固定账单
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM fixed_accounts WHERE id = $2 AND user_id = $1")
            .bind(user_id)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
