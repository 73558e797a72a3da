//! HTTP 处理器

pub mod auth;
pub mod bank_statement;
pub mod category;
pub mod fixed_account;
pub mod health;
pub mod investment;
pub mod note;
pub mod transaction;
pub mod user;
