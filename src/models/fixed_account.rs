//! Fixed account (recurring bill) domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed account row joined with its category name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FixedAccount {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub description: Option<String>,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub category_name: String,
}

/// Create fixed account request
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFixedAccountRequest {
    pub category_id: i64,
    pub description: Option<String>,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Update fixed account request; omitted fields keep their stored value
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFixedAccountRequest {
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

impl UpdateFixedAccountRequest {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.due_date.is_none()
    }
}
