pub mod jwt;
pub mod session;

pub use jwt::{mint_session_token, verify_session_token, SessionClaims, SESSION_TTL_SECS};
pub use session::{resolve_session, SessionIdentity, SESSION_COOKIE};
