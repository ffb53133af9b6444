//! Caller identity extraction.
//!
//! Credential validation happens upstream. The auth layer in front of this
//! service resolves the bearer token and forwards the owner identifier in
//! the `x-owner-id` header; requests without it are anonymous.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the resolved owner identifier.
pub const OWNER_HEADER: &str = "x-owner-id";

/// The resolved caller identity, `None` for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner(pub Option<String>);

impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner = parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        Ok(Self(owner))
    }
}
