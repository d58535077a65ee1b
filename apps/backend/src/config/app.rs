use super::ai::CompletionConfig;
use super::db::{db_url, DbProfile};
use super::payments::StripeConfig;
use super::{must_var, opt_var, var_or};
use crate::error::AppError;

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Verification key for identity-provider session tokens.
    pub session_secret: String,
    pub stripe: StripeConfig,
    pub completions: CompletionConfig,
    /// Origin the gate calls for subscription checks; `None` uses the
    /// request's own origin.
    pub subscription_check_base_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let port_raw = var_or("BACKEND_PORT", "3001");
        let port = port_raw.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_raw}'"
            ))
        })?;

        Ok(Self {
            host: var_or("BACKEND_HOST", "0.0.0.0"),
            port,
            database_url: db_url(DbProfile::Prod)?,
            session_secret: must_var("SESSION_JWT_SECRET")?,
            stripe: StripeConfig::from_env()?,
            completions: CompletionConfig::from_env()?,
            subscription_check_base_url: opt_var("SUBSCRIPTION_CHECK_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
        })
    }
}
