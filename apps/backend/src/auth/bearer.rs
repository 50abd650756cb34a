//! `Authorization: Bearer <token>` parsing.

use actix_web::http::header::HeaderValue;

use super::error::AuthError;

/// Token from a `Bearer <token>` header value.
///
/// Absent, non-ASCII, wrong scheme, extra segments or an empty token all
/// yield [`AuthError::MissingAuth`].
pub fn parse_bearer(header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = header
        .ok_or(AuthError::MissingAuth)?
        .to_str()
        .map_err(|_| AuthError::MissingAuth)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingAuth),
    }
}
