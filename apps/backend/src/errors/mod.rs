//! Error codes for the meal plan backend.

pub mod error_code;

pub use error_code::ErrorCode;
