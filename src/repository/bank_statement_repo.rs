//! Bank statement repository (数据库访问层)

use crate::{error::AppError, models::bank_statement::*};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct BankStatementRepository {
    db: PgPool,
}

impl BankStatementRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建流水记录
    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateBankStatementRequest,
    ) -> Result<BankStatement, AppError> {
        let statement = sqlx::query_as::<_, BankStatement>(
            r#"
            INSERT INTO bank_statements (user_id, entry_id, entry_type, value, description, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(req.entry_id)
        .bind(&req.entry_type)
        .bind(req.value)
        .bind(&req.description)
        .bind(req.date)
        .fetch_one(&self.db)
        .await?;

        Ok(statement)
    }

    /// 列出用户流水，按日期降序；entry_id 为空时列出全部
    pub async fn list(
        &self,
        user_id: i64,
        entry_id: Option<i64>,
    ) -> Result<Vec<BankStatement>, AppError> {
        let statements = sqlx::query_as::<_, BankStatement>(
            r#"
            SELECT * FROM bank_statements
            WHERE user_id = $1 AND ($2::BIGINT IS NULL OR entry_id = $2)
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .bind(entry_id)
        .fetch_all(&self.db)
        .await?;

        Ok(statements)
    }

    /// 按贷('C')/借('D')汇总用户余额
    pub async fn balance(&self, user_id: i64) -> Result<Balance, AppError> {
        let balance = sqlx::query_as::<_, Balance>(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN entry_type = 'C' THEN value ELSE 0 END), 0) AS total_credits,
                COALESCE(SUM(CASE WHEN entry_type = 'D' THEN value ELSE 0 END), 0) AS total_debits,
                COALESCE(SUM(CASE WHEN entry_type = 'C' THEN value ELSE -value END), 0) AS balance
            FROM bank_statements
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(balance)
    }

    /// 删除由 entry_id + date 标识的单条流水
    pub async fn delete_one(
        &self,
        user_id: i64,
        entry_id: i64,
        date: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bank_statements
            WHERE id IN (
                SELECT id FROM bank_statements
                WHERE user_id = $1 AND entry_id = $2 AND date = $3
                LIMIT 1
            )
            "#,
        )
        .bind(user_id)
        .bind(entry_id)
        .bind(date)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
