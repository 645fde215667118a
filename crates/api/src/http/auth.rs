//! Bearer credential extraction

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use meetline_domain::AccessToken;

use super::error::AppError;

/// The caller's credential, taken from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct BearerToken(pub AccessToken);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("missing Authorization header".into()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("malformed Authorization header".into()))?;

        let token = parse_bearer(header)
            .ok_or_else(|| AppError::Unauthorized("expected a Bearer credential".into()))?;

        AccessToken::new(token)
            .map(BearerToken)
            .map_err(|_| AppError::Unauthorized("empty bearer token".into()))
    }
}

/// Token part of a `Bearer` authorization value; the scheme is
/// case-insensitive.
fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(char::is_whitespace)?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}
