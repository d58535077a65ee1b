use std::fmt;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::ai::{CompletionModel, CompletionParams};
use crate::config::payments::PriceCatalog;
use crate::gate::SubscriptionCheck;
use crate::payments::PaymentGateway;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub payments: Arc<dyn PaymentGateway>,
    pub prices: PriceCatalog,
    /// Public site origin used for checkout return URLs.
    pub public_base_url: String,
    pub completions: Arc<dyn CompletionModel>,
    pub completion_params: CompletionParams,
    pub subscription_check: Arc<dyn SubscriptionCheck>,
}

impl AppState {
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("security", &self.security)
            .field("prices", &self.prices)
            .field("public_base_url", &self.public_base_url)
            .field("completion_params", &self.completion_params)
            .finish_non_exhaustive()
    }
}
