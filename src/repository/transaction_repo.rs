//! Transaction repository (数据库访问层)
//!
//! 所有查询都带 user_id 约束，归属检查在 SQL 层完成。

use crate::{error::AppError, models::transaction::*};
use sqlx::PgPool;

pub struct TransactionRepository {
    db: PgPool,
}

impl TransactionRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出用户的所有交易（附带分类名称）
    pub async fn list(&self, user_id: i64) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT t.*, tc.name AS category_name
            FROM transactions t
            JOIN transaction_categories tc ON t.category_id = tc.id
            WHERE t.user_id = $1
            ORDER BY t.date DESC, t.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(transactions)
    }

    /// 查找单笔交易
    pub async fn find(&self, user_id: i64, id: i64) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT t.*, tc.name AS category_name
            FROM transactions t
            JOIN transaction_categories tc ON t.category_id = tc.id
            WHERE t.id = $2 AND t.user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(transaction)
    }

    /// 创建交易
    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            WITH inserted AS (
                INSERT INTO transactions (user_id, category_id, date, description, amount, type)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT inserted.*, tc.name AS category_name
            FROM inserted
            JOIN transaction_categories tc ON inserted.category_id = tc.id
            "#,
        )
        .bind(user_id)
        .bind(req.category_id)
        .bind(req.date)
        .bind(&req.description)
        .bind(req.amount)
        .bind(&req.transaction_type)
        .fetch_one(&self.db)
        .await?;

        Ok(transaction)
    }

    /// 部分更新交易，未提供的字段保持原值
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            WITH updated AS (
                UPDATE transactions
                SET
                    category_id = COALESCE($3, category_id),
                    date = COALESCE($4, date),
                    description = COALESCE($5, description),
                    amount = COALESCE($6, amount),
                    type = COALESCE($7, type),
                    updated_at = NOW()
                WHERE id = $2 AND user_id = $1
                RETURNING *
            )
            SELECT updated.*, tc.name AS category_name
            FROM updated
            JOIN transaction_categories tc ON updated.category_id = tc.id
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(req.category_id)
        .bind(req.date)
        .bind(&req.description)
        .bind(req.amount)
        .bind(&req.transaction_type)
        .fetch_optional(&self.db)
        .await?;

        Ok(transaction)
    }

    /// 删除交易
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $2 AND user_id = $1")
            .bind(user_id)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
