//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{handlers, middleware::AppState};

/// 请求体上限：资料更新携带 base64 图片
const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 认证路由（无需令牌）
    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/auth/refresh-token",
            post(handlers::auth::refresh_token),
        );

    // 需要认证的路由
    let protected_routes = Router::new()
        // 用户
        .route("/api/users", get(handlers::user::list_users))
        .route(
            "/api/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route("/api/users/{id}/meta", put(handlers::user::update_user_meta))
        // 交易
        .route(
            "/api/transactions",
            get(handlers::transaction::list_transactions)
                .post(handlers::transaction::create_transaction),
        )
        .route(
            "/api/transactions/{id}",
            get(handlers::transaction::get_transaction)
                .put(handlers::transaction::update_transaction)
                .delete(handlers::transaction::delete_transaction),
        )
        // 交易分类
        .route(
            "/api/transaction-categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/api/transaction-categories/{id}",
            get(handlers::category::get_category)
                .put(handlers::category::update_category)
                .delete(handlers::category::delete_category),
        )
        // 投资
        .route(
            "/api/investments",
            get(handlers::investment::list_investments)
                .post(handlers::investment::create_investment),
        )
        .route(
            "/api/investments/{id}",
            get(handlers::investment::get_investment)
                .put(handlers::investment::update_investment)
                .delete(handlers::investment::delete_investment),
        )
        // 固定账单
        .route(
            "/api/fixed-accounts",
            get(handlers::fixed_account::list_fixed_accounts)
                .post(handlers::fixed_account::create_fixed_account),
        )
        .route(
            "/api/fixed-accounts/{id}",
            get(handlers::fixed_account::get_fixed_account)
                .put(handlers::fixed_account::update_fixed_account)
                .delete(handlers::fixed_account::delete_fixed_account),
        )
        // 便签
        .route(
            "/api/notes",
            get(handlers::note::list_notes).post(handlers::note::create_note),
        )
        .route(
            "/api/notes/{id}",
            put(handlers::note::update_note).delete(handlers::note::delete_note),
        )
        // 银行流水
        .route(
            "/api/bank-statements",
            post(handlers::bank_statement::create_statement)
                .get(handlers::bank_statement::list_statements)
                .delete(handlers::bank_statement::delete_statement),
        )
        .route(
            "/api/bank-statements/balance",
            get(handlers::bank_statement::get_balance),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.jwt_service.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(
            crate::middleware::request_tracking_middleware,
        ))
        .with_state(state)
}
