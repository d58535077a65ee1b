//! Client for the subscription status endpoint the gate consults.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::routes::STATUS_CHECK_PATH;

#[derive(Debug, Error)]
pub enum SubscriptionCheckError {
    #[error("subscription check unreachable: {0}")]
    Transport(String),
    #[error("subscription check returned status {0}")]
    Status(u16),
    #[error("subscription check body malformed: {0}")]
    MalformedBody(String),
}

/// Answers "is this user subscribed?" for the gate.
#[async_trait]
pub trait SubscriptionCheck: Send + Sync {
    /// `origin` is the scheme and host of the request being gated. `cookie`
    /// is forwarded verbatim.
    async fn is_active(
        &self,
        origin: &str,
        user_id: &str,
        cookie: Option<&str>,
    ) -> Result<bool, SubscriptionCheckError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody {
    #[serde(default)]
    subscription_active: Option<bool>,
}

/// Parse a status response body. A missing or null flag reads as inactive.
pub(crate) fn parse_status_body(body: &[u8]) -> Result<bool, SubscriptionCheckError> {
    let parsed: StatusBody = serde_json::from_slice(body)
        .map_err(|e| SubscriptionCheckError::MalformedBody(e.to_string()))?;
    Ok(parsed.subscription_active.unwrap_or(false))
}

/// Calls `GET {origin}/api/check-subscription?userId=...` over HTTP.
#[derive(Clone)]
pub struct HttpSubscriptionCheck {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpSubscriptionCheck {
    /// With `base_url` set, every check goes there instead of the request's
    /// own origin.
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SubscriptionCheck for HttpSubscriptionCheck {
    async fn is_active(
        &self,
        origin: &str,
        user_id: &str,
        cookie: Option<&str>,
    ) -> Result<bool, SubscriptionCheckError> {
        let base = self.base_url.as_deref().unwrap_or(origin);
        let url = format!("{}{STATUS_CHECK_PATH}", base.trim_end_matches('/'));

        let mut request = self.client.get(&url).query(&[("userId", user_id)]);
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SubscriptionCheckError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubscriptionCheckError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubscriptionCheckError::Transport(e.to_string()))?;
        let active = parse_status_body(&body)?;
        debug!(user_id, active, "subscription check completed");
        Ok(active)
    }
}
