//! User domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::ValidationError;

/// User account row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string; the salt is embedded
    pub password_hash: String,

    // Profile images as base64 data URLs
    pub path_image_banner: Option<String>,
    pub path_image_icon: Option<String>,

    /// Savings goal
    pub meta: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User response (without credential material)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub path_image_banner: Option<String>,
    pub path_image_icon: Option<String>,
    pub meta: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            path_image_banner: user.path_image_banner,
            path_image_icon: user.path_image_icon,
            meta: user.meta,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Update user request
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name is required and cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = validate_data_image_url))]
    pub path_image_banner: Option<String>,

    #[validate(custom(function = validate_data_image_url))]
    pub path_image_icon: Option<String>,
}

/// Update savings goal request; a null meta clears the goal
#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateUserMetaRequest {
    pub meta: Option<f64>,
}

/// Image fields must be inline base64 data URLs
fn validate_data_image_url(value: &str) -> Result<(), ValidationError> {
    if value.starts_with("data:image/") {
        Ok(())
    } else {
        Err(ValidationError::new("data_image")
            .with_message(Cow::from("Must be a base64 data:image/ URL")))
    }
}
