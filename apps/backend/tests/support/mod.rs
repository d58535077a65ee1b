#![allow(dead_code)]

pub mod auth;
pub mod state;
pub mod stubs;

pub use app_builder::{call, create_gated_app, create_test_app};
pub use auth::{bearer, session_cookie, TEST_SECRET};
pub use state::{seed_profile, TestState};
