pub mod jwt;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::api::error::ApiError;

/// Resolved identity of the calling owner. Present as an argument on
/// owner-scoped handlers; extraction rejects the request with 401 before the
/// handler runs, like the original's auth middleware.
#[derive(Debug, Clone, Copy)]
pub struct AuthOwner(pub i64);

impl<S> FromRequestParts<S> for AuthOwner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = jwt::extract_bearer_token(auth_header)?;
        let owner_id = jwt::validate_jwt_and_extract_owner(token)?;

        Ok(AuthOwner(owner_id))
    }
}
