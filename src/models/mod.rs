//! 领域模型与请求/响应 DTO

pub mod auth;
pub mod bank_statement;
pub mod category;
pub mod fixed_account;
pub mod investment;
pub mod note;
pub mod transaction;
pub mod user;
