//! Transaction domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::ValidationError;

/// Transaction row joined with its category name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,

    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub transaction_type: String, // income, expense

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub category_name: String,
}

/// Create transaction request
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub category_id: i64,
    pub date: NaiveDate,

    pub description: Option<String>,
    pub amount: f64,

    #[serde(rename = "type", default = "default_transaction_type")]
    #[validate(custom(function = validate_transaction_type))]
    pub transaction_type: String,
}

/// Update transaction request; omitted fields keep their stored value
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub category_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<f64>,

    #[serde(rename = "type")]
    #[validate(custom(function = validate_transaction_type))]
    pub transaction_type: Option<String>,
}

impl UpdateTransactionRequest {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.transaction_type.is_none()
    }
}

fn default_transaction_type() -> String {
    "income".to_string()
}

fn validate_transaction_type(value: &str) -> Result<(), ValidationError> {
    match value {
        "income" | "expense" => Ok(()),
        _ => Err(ValidationError::new("transaction_type")
            .with_message(Cow::from("Type must be 'income' or 'expense'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_transaction_validation() {
        let valid = CreateTransactionRequest {
            category_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description: Some("Lunch".to_string()),
            amount: 12.5,
            transaction_type: "expense".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_type = CreateTransactionRequest {
            category_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description: None,
            amount: 12.5,
            transaction_type: "transfer".to_string(),
        };
        assert!(bad_type.validate().is_err());
    }

    #[test]
    fn test_create_transaction_type_defaults_to_income() {
        let req: CreateTransactionRequest = serde_json::from_value(serde_json::json!({
            "categoryId": 1,
            "date": "2025-01-15",
            "amount": 100.0
        }))
        .unwrap();

        assert_eq!(req.transaction_type, "income");
    }

    #[test]
    fn test_update_request_is_empty() {
        let empty = UpdateTransactionRequest {
            category_id: None,
            date: None,
            description: None,
            amount: None,
            transaction_type: None,
        };
        assert!(empty.is_empty());

        let partial = UpdateTransactionRequest {
            amount: Some(1.0),
            ..empty
        };
        assert!(!partial.is_empty());
    }
}
