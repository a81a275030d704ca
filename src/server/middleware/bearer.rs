//! Bearer token extraction from request headers.

use axum::http::{header::AUTHORIZATION, HeaderMap};

const BEARER_PREFIX: &str = "Bearer ";

/// Reads the token from an `Authorization: Bearer <token>` header.
///
/// # Returns
/// - `Some(&str)` - Non-empty token following the `Bearer` scheme
/// - `None` - Header absent, not valid UTF-8, another scheme, or an empty token
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() {
        return None;
    }

    Some(token)
}
