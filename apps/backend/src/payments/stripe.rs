//! Stripe Checkout over its form-encoded REST API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::gateway::{CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentGateway};
use crate::config::payments::StripeConfig;

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: Option<String>,
}

#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(client: reqwest::Client, config: &StripeConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        }
    }
}

/// Form body for `POST /v1/checkout/sessions`. User id and plan ride along
/// as metadata so the webhook can reconcile the subscription later.
pub(crate) fn checkout_form(request: &CheckoutSessionRequest) -> Vec<(&'static str, String)> {
    vec![
        ("mode", "subscription".to_string()),
        ("payment_method_types[0]", "card".to_string()),
        ("line_items[0][price]", request.price_id.clone()),
        ("line_items[0][quantity]", "1".to_string()),
        ("customer_email", request.customer_email.clone()),
        ("metadata[clerkUserId]", request.user_id.clone()),
        ("metadata[planType]", request.plan.as_str().to_string()),
        ("success_url", request.success_url.clone()),
        ("cancel_url", request.cancel_url.clone()),
    ]
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&checkout_form(request))
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| format!("payment provider returned {status}"));
            warn!(status = status.as_u16(), error = %message, "stripe.checkout_rejected");
            return Err(PaymentError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let session: SessionResponse =
            serde_json::from_slice(&body).map_err(|e| PaymentError::Decode(e.to_string()))?;
        let url = session
            .url
            .ok_or_else(|| PaymentError::Decode("checkout session has no url".to_string()))?;

        debug!(session_id = %session.id, "stripe.checkout_created");
        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}
