//! Bank statement domain models
//!
//! Entry type is a single-character flag: 'C' credit, 'D' debit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::ValidationError;

/// Bank statement row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BankStatement {
    pub id: i64,
    pub user_id: i64,
    pub entry_id: i64,
    pub entry_type: Option<String>,
    pub value: f64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Create bank statement request
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBankStatementRequest {
    pub entry_id: i64,

    #[validate(custom(function = validate_entry_type))]
    pub entry_type: Option<String>,

    pub value: f64,

    #[validate(length(max = 100, message = "Description must be a string up to 100 characters"))]
    pub description: Option<String>,

    pub date: DateTime<Utc>,
}

/// Query filter for listing statements
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStatementListQuery {
    pub entry_id: Option<i64>,
}

/// Identifies a single statement row for deletion
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStatementDeleteQuery {
    pub entry_id: i64,
    pub date: DateTime<Utc>,
}

/// Aggregated balance for one user
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub total_credits: f64,
    pub total_debits: f64,
    pub balance: f64,
}

/// Balance response including the owner id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub user_id: i64,
    pub total_credits: f64,
    pub total_debits: f64,
    pub balance: f64,
}

fn validate_entry_type(value: &str) -> Result<(), ValidationError> {
    match value {
        "C" | "D" => Ok(()),
        _ => Err(ValidationError::new("entry_type")
            .with_message(Cow::from("EntryType must be 'C' or 'D'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_statement_validation() {
        let valid = CreateBankStatementRequest {
            entry_id: 1,
            entry_type: Some("C".to_string()),
            value: 100.0,
            description: Some("Paycheck".to_string()),
            date: Utc::now(),
        };
        assert!(valid.validate().is_ok());

        let bad_type = CreateBankStatementRequest {
            entry_type: Some("X".to_string()),
            ..valid
        };
        assert!(bad_type.validate().is_err());
    }

    #[test]
    fn test_description_length_limit() {
        let too_long = CreateBankStatementRequest {
            entry_id: 1,
            entry_type: Some("D".to_string()),
            value: 10.0,
            description: Some("x".repeat(101)),
            date: Utc::now(),
        };
        assert!(too_long.validate().is_err());
    }
}
