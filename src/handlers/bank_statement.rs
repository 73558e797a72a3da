//! 银行流水的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::bank_statement::*,
    repository::BankStatementRepository,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 创建流水记录
pub async fn create_statement(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateBankStatementRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = BankStatementRepository::new(state.db.clone());
    let statement = repo.create(auth_context.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(statement)))
}

/// 列出流水（可按 entryId 过滤），按日期降序
pub async fn list_statements(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Query(query): Query<BankStatementListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BankStatementRepository::new(state.db.clone());
    let statements = repo.list(auth_context.user_id, query.entry_id).await?;

    Ok(Json(statements))
}

/// 查询余额：贷方合计、借方合计和带符号的余额
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = BankStatementRepository::new(state.db.clone());
    let balance = repo.balance(auth_context.user_id).await?;

    Ok(Json(BalanceResponse {
        user_id: auth_context.user_id,
        total_credits: balance.total_credits,
        total_debits: balance.total_debits,
        balance: balance.balance,
    }))
}

/// 删除由 entryId + date 标识的单条流水
pub async fn delete_statement(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Query(query): Query<BankStatementDeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BankStatementRepository::new(state.db.clone());
    let deleted = repo
        .delete_one(auth_context.user_id, query.entry_id, query.date)
        .await?;
    if !deleted {
        return Err(AppError::not_found("Bank statement"));
    }

    Ok(StatusCode::NO_CONTENT)
}
