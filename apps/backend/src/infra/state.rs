use std::sync::Arc;

use crate::ai::{CompletionModel, CompletionParams};
use crate::config::payments::{PriceCatalog, DEFAULT_PUBLIC_BASE_URL};
use crate::error::AppError;
use crate::gate::SubscriptionCheck;
use crate::infra::db::bootstrap_db;
use crate::payments::PaymentGateway;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_url: Option<String>,
    payments: Option<Arc<dyn PaymentGateway>>,
    prices: PriceCatalog,
    public_base_url: String,
    completions: Option<Arc<dyn CompletionModel>>,
    completion_params: CompletionParams,
    subscription_check: Option<Arc<dyn SubscriptionCheck>>,
}

impl StateBuilder {
    pub fn new(security_config: SecurityConfig) -> Self {
        Self {
            security_config,
            db_url: None,
            payments: None,
            prices: PriceCatalog::default(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            completions: None,
            completion_params: CompletionParams {
                temperature: 0.7,
                max_tokens: 1500,
            },
            subscription_check: None,
        }
    }

    /// Connect to `url` and run pending migrations during `build`.
    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    pub fn with_payments(mut self, gateway: Arc<dyn PaymentGateway>) -> Self {
        self.payments = Some(gateway);
        self
    }

    pub fn with_prices(mut self, prices: PriceCatalog) -> Self {
        self.prices = prices;
        self
    }

    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_completions(
        mut self,
        model: Arc<dyn CompletionModel>,
        params: CompletionParams,
    ) -> Self {
        self.completions = Some(model);
        self.completion_params = params;
        self
    }

    pub fn with_subscription_check(mut self, check: Arc<dyn SubscriptionCheck>) -> Self {
        self.subscription_check = Some(check);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let payments = self
            .payments
            .ok_or_else(|| AppError::config("payment gateway not configured"))?;
        let completions = self
            .completions
            .ok_or_else(|| AppError::config("completion model not configured"))?;
        let subscription_check = self
            .subscription_check
            .ok_or_else(|| AppError::config("subscription check not configured"))?;

        let db = match self.db_url {
            Some(url) => Some(bootstrap_db(&url).await?),
            None => None,
        };

        Ok(AppState {
            db,
            security: self.security_config,
            payments,
            prices: self.prices,
            public_base_url: self.public_base_url,
            completions,
            completion_params: self.completion_params,
            subscription_check,
        })
    }
}
