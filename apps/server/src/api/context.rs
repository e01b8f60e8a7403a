//! Caller account resolution.
//!
//! Authentication is handled upstream; the proxy forwards the resolved
//! tenant in the `X-Account-Id` header. Handlers extract it here and pass it
//! explicitly into services - nothing in the core reads ambient context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

/// The caller's account (tenant) id.
pub struct AccountId(pub String);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-account-id")
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .map(|value| AccountId(value.to_string()))
            .ok_or_else(|| ApiError::bad_request("Missing X-Account-Id header"))
    }
}
