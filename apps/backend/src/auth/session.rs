//! Session identity resolution.
//!
//! A request is signed in when it carries a valid session token, either in
//! the `__session` cookie set by the frontend or as a Bearer token. An
//! invalid or expired token is treated the same as no token.

use actix_web::http::header::{HeaderMap, AUTHORIZATION, COOKIE};

use super::jwt::verify_session_token;
use crate::state::security_config::SecurityConfig;

pub const SESSION_COOKIE: &str = "__session";

/// The signed-in user behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    pub email: String,
}

/// Resolve the identity from request headers, or `None` when anonymous.
pub fn resolve_session(headers: &HeaderMap, security: &SecurityConfig) -> Option<SessionIdentity> {
    let token = bearer_token(headers).or_else(|| session_cookie(headers))?;
    let claims = verify_session_token(&token, security).ok()?;
    Some(SessionIdentity {
        user_id: claims.sub,
        email: claims.email,
    })
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme == "Bearer" && !token.is_empty()).then(|| token.to_string())
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
