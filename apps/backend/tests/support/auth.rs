use std::time::SystemTime;

use mealplan_backend::auth::{mint_session_token, SESSION_COOKIE, SESSION_TTL_SECS};
use mealplan_backend::SecurityConfig;

pub const TEST_SECRET: &[u8] = b"integration_test_session_secret";

pub fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn token_for(user_id: &str, email: &str) -> String {
    mint_session_token(
        user_id,
        email,
        SystemTime::now(),
        SESSION_TTL_SECS,
        &security(),
    )
    .expect("mint session token")
}

/// `("Cookie", "__session=<jwt>")` for a signed-in request.
pub fn session_cookie(user_id: &str, email: &str) -> (&'static str, String) {
    ("cookie", format!("{SESSION_COOKIE}={}", token_for(user_id, email)))
}

/// `("Authorization", "Bearer <jwt>")` for a signed-in request.
pub fn bearer(user_id: &str, email: &str) -> (&'static str, String) {
    ("authorization", format!("Bearer {}", token_for(user_id, email)))
}
