use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::env;

use crate::api::error::ApiError;

/// Claims issued by the auth service. `sub` carries the owner's user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Validate a bearer token and resolve the calling owner's id.
///
/// The signing secret comes from JWT_SECRET, falling back to SECRET_KEY,
/// matching the auth service's configuration.
pub fn validate_jwt_and_extract_owner(token: &str) -> Result<i64, ApiError> {
    let jwt_secret = env::var("JWT_SECRET")
        .or_else(|_| env::var("SECRET_KEY"))
        .map_err(|_| {
            ApiError::Internal("JWT_SECRET or SECRET_KEY environment variable not set".to_string())
        })?
        .trim_matches('"')
        .to_string();

    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| ApiError::Unauthorized("Invalid subject claim in token".to_string()))
}

/// Extract the token from an Authorization header.
/// Expected format: "Bearer <token>"
pub fn extract_bearer_token(auth_header: Option<&str>) -> Result<&str, ApiError> {
    let auth_value = auth_header
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    auth_value.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format, expected 'Bearer <token>'".to_string(),
        )
    })
}
