//! Transaction category models
//!
//! Categories belong to a single user. Investment and fixed-account
//! categories are seeded lookup tables with no API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::ValidationError;

/// Transaction category row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCategory {
    pub id: i64,
    pub user_id: i64,
    pub name: String,

    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String, // Income, Expense

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create category request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(custom(function = validate_category_type))]
    pub category_type: String,
}

/// Update category request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(custom(function = validate_category_type))]
    pub category_type: Option<String>,
}

fn validate_category_type(value: &str) -> Result<(), ValidationError> {
    match value {
        "Income" | "Expense" => Ok(()),
        _ => Err(ValidationError::new("category_type")
            .with_message(Cow::from("Type must be 'Income' or 'Expense'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_category_validation() {
        let valid = CreateCategoryRequest {
            name: "Groceries".to_string(),
            category_type: "Expense".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_type = CreateCategoryRequest {
            name: "Groceries".to_string(),
            category_type: "Other".to_string(),
        };
        assert!(bad_type.validate().is_err());
    }
}
