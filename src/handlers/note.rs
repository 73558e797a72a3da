//! 便签管理的 HTTP 处理器
//!
//! 每个用户最多保留 5 条便签。

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::note::*,
    repository::NoteRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 列出便签（按到期日升序）
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = NoteRepository::new(state.db.clone());
    let notes = repo.list(auth_context.user_id).await?;

    Ok(Json(notes))
}

/// 创建便签
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = NoteRepository::new(state.db.clone());

    // 数量上限检查
    let existing = repo.count(auth_context.user_id).await?;
    if existing >= NOTE_LIMIT {
        return Err(AppError::bad_request("Note limit reached (max 5 per user)"));
    }

    let note = repo.create(auth_context.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// 更新便签
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    if req.is_empty() {
        return Err(AppError::bad_request("No fields to update"));
    }

    let repo = NoteRepository::new(state.db.clone());
    let note = repo
        .update(auth_context.user_id, id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Note"))?;

    Ok(Json(note))
}

/// 删除便签
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = NoteRepository::new(state.db.clone());
    let deleted = repo.delete(auth_context.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Note"));
    }

    Ok(StatusCode::NO_CONTENT)
}
