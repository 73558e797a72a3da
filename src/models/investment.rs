//! Investment domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Investment row joined with its category name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
    pub return_percentage: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub category_name: String,
}

/// Create investment request
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestmentRequest {
    pub category_id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,

    #[validate(range(min = 0.0, max = 100.0, message = "Return percentage must be 0-100"))]
    pub return_percentage: Option<f64>,
}

/// Update investment request; omitted fields keep their stored value
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvestmentRequest {
    pub category_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "Return percentage must be 0-100"))]
    pub return_percentage: Option<f64>,
}

impl UpdateInvestmentRequest {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.return_percentage.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_investment_validation() {
        let valid = CreateInvestmentRequest {
            category_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            description: None,
            amount: 1000.0,
            return_percentage: Some(5.25),
        };
        assert!(valid.validate().is_ok());

        let out_of_range = CreateInvestmentRequest {
            return_percentage: Some(250.0),
            ..valid
        };
        assert!(out_of_range.validate().is_err());
    }
}
