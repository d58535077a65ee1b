//! Backend test support utilities
//!
//! Shared helpers for backend integration tests: unified logging
//! initialization, error body assertions and unique test data.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
