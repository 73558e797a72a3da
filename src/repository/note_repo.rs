//! Note repository (数据库访问层)

use crate::{error::AppError, models::note::*};
use sqlx::PgPool;

pub struct NoteRepository {
    db: PgPool,
}

impl NoteRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出用户的所有便签，按到期日升序
    pub async fn list(&self, user_id: i64) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE user_id = $1 ORDER BY due_date ASC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(notes)
    }

    /// 统计用户便签数量
    pub async fn count(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    /// 创建便签
    pub async fn create(&self, user_id: i64, req: &CreateNoteRequest) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (user_id, note, due_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&req.note)
        .bind(req.due_date)
        .fetch_one(&self.db)
        .await?;

        Ok(note)
    }

    /// 部分更新便签
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        req: &UpdateNoteRequest,
    ) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET
                note = COALESCE($3, note),
                due_date = COALESCE($4, due_date),
                updated_at = NOW()
            WHERE id = $2 AND user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(&req.note)
        .bind(req.due_date)
        .fetch_optional(&self.db)
        .await?;

        Ok(note)
    }

    /// 删除便签
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $2 AND user_id = $1")
            .bind(user_id)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
