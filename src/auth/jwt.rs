//! JWT token generation and validation
//! Implements access token + refresh token pattern with independent secrets

use crate::{config::AppConfig, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// JWT claims
///
/// The identity fields default to empty strings on decode so that a
/// structurally valid token with a missing identity can be told apart
/// from a token that fails signature or expiry checks.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID, stringified)
    #[serde(default)]
    pub sub: String,

    /// User email
    #[serde(default)]
    pub email: String,

    /// Token type (access or refresh)
    #[serde(default)]
    pub token_type: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

impl Claims {
    /// Extract the `{userId, email}` identity, rejecting payloads where
    /// either field is absent or the subject is not numeric.
    pub fn identity(&self) -> Result<(i64, String), AppError> {
        if self.sub.is_empty() || self.email.is_empty() {
            return Err(AppError::authentication("Invalid token payload"));
        }

        let user_id = self
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::authentication("Invalid token payload"))?;

        Ok((user_id, self.email.clone()))
    }
}

/// Token pair response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires
    pub expires_in: u64,
}

/// JWT service
///
/// Access and refresh tokens are signed with separate secrets, so a
/// refresh token can never pass access-token verification (and vice
/// versa) even before the token_type check.
pub struct JwtService {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_token_exp_secs: u64,
    refresh_token_exp_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let access_secret = config.security.access_token_secret.expose_secret();
        let refresh_secret = config.security.refresh_token_secret.expose_secret();

        // Ensure secrets are at least 32 bytes for HS256
        if access_secret.len() < 32 || refresh_secret.len() < 32 {
            return Err(AppError::Config(
                "JWT secrets too short (min 32 chars)".to_string(),
            ));
        }

        Ok(Self {
            access_encoding_key: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_token_exp_secs: config.security.access_token_exp_secs,
            refresh_token_exp_secs: config.security.refresh_token_exp_secs,
        })
    }

    fn build_claims(user_id: i64, email: &str, token_type: &str, exp_secs: u64) -> Claims {
        let now = Utc::now();
        let expiration = now + Duration::seconds(exp_secs as i64);

        Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            token_type: token_type.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Generate access token
    pub fn generate_access_token(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let claims = Self::build_claims(user_id, email, "access", self.access_token_exp_secs);

        encode(&Header::default(), &claims, &self.access_encoding_key).map_err(|e| {
            tracing::error!("Failed to encode access token: {:?}", e);
            AppError::Internal(format!("Failed to encode access token: {}", e))
        })
    }

    /// Generate refresh token
    pub fn generate_refresh_token(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let claims = Self::build_claims(user_id, email, "refresh", self.refresh_token_exp_secs);

        encode(&Header::default(), &claims, &self.refresh_encoding_key).map_err(|e| {
            tracing::error!("Failed to encode refresh token: {:?}", e);
            AppError::Internal(format!("Failed to encode refresh token: {}", e))
        })
    }

    /// Generate token pair
    pub fn generate_token_pair(&self, user_id: i64, email: &str) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user_id, email)?;
        let refresh_token = self.generate_refresh_token(user_id, email)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_token_exp_secs,
        })
    }

    fn validate(&self, token: &str, decoding_key: &DecodingKey) -> Result<Claims, AppError> {
        Ok(
            decode::<Claims>(token, decoding_key, &Validation::new(Algorithm::HS256))
                .map_err(|e| {
                    tracing::debug!("Token validation failed: {:?}", e);
                    AppError::Unauthorized
                })?
                .claims,
        )
    }

    /// Validate an access token: signature, expiry and token type
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.validate(token, &self.access_decoding_key)?;

        if claims.token_type != "access" {
            tracing::debug!(
                "Token type mismatch: expected 'access', got '{}'",
                claims.token_type
            );
            return Err(AppError::Unauthorized);
        }

        Ok(claims)
    }

    /// Validate a refresh token: signature, expiry and token type
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.validate(token, &self.refresh_decoding_key)?;

        if claims.token_type != "refresh" {
            tracing::debug!(
                "Token type mismatch: expected 'refresh', got '{}'",
                claims.token_type
            );
            return Err(AppError::Unauthorized);
        }

        Ok(claims)
    }
}
