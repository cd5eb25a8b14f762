//! Session token extraction.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::web::error::ApiError;

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "X-Token";

/// Session token as presented by the client, if any.
///
/// Extraction never fails. Whether the token resolves to a user is decided by
/// the file service, since some operations accept anonymous callers.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    /// Get the token as a string slice.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(SessionToken(token))
    }
}
