use async_trait::async_trait;
use thiserror::Error;

use super::plans::PlanType;

/// Everything needed to open a hosted subscription checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionRequest {
    pub plan: PlanType,
    pub price_id: String,
    pub user_id: String,
    pub customer_email: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A created checkout session; `url` is where the browser goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    /// The provider answered with an error object; carries its message.
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("payment provider unreachable: {0}")]
    Transport(String),
    #[error("unexpected payment provider response: {0}")]
    Decode(String),
}

/// Hosted checkout provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError>;
}
