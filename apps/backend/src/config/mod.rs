//! Environment-driven configuration.
//!
//! Variables must be set by the runtime environment (docker env_file, or
//! sourced manually for local runs). Loaders fail with `AppError::Config`
//! naming the first missing required variable.

pub mod ai;
pub mod app;
pub mod db;
pub mod payments;

use std::env;

use crate::error::AppError;

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    opt_var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Optional variable; blank values count as unset.
pub(crate) fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn var_or(name: &str, default: &str) -> String {
    opt_var(name).unwrap_or_else(|| default.to_string())
}
