//! Note domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Each user may keep at most this many notes
pub const NOTE_LIMIT: i64 = 5;

/// Note row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub note: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create note request
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, message = "Note text is required"))]
    pub note: String,

    pub due_date: NaiveDate,
}

/// Update note request; omitted fields keep their stored value
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[validate(length(min = 1, message = "Note text cannot be empty"))]
    pub note: Option<String>,

    pub due_date: Option<NaiveDate>,
}

impl UpdateNoteRequest {
    pub fn is_empty(&self) -> bool {
        self.note.is_none() && self.due_date.is_none()
    }
}
