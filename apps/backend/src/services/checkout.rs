//! Hosted checkout for subscription plans.

use serde::Deserialize;
use tracing::{error, info};

use crate::config::payments::PriceCatalog;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::payments::{CheckoutSessionRequest, PaymentGateway, PlanType};

pub const MISSING_FIELDS_MESSAGE: &str = "Plan type, User ID, and Email are required.";
pub const INVALID_PLAN_MESSAGE: &str = "Invalid plan type.";
pub const PRICE_NOT_FOUND_MESSAGE: &str = "Price ID for the selected plan not found.";

/// Body of `POST /api/checkout`. Every field is checked for presence by
/// [`validate`] so that missing and empty values share one message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A request that passed validation and has a price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCheckout {
    pub plan: PlanType,
    pub price_id: String,
    pub user_id: String,
    pub email: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn validate(request: &CheckoutRequest, prices: &PriceCatalog) -> Result<ValidCheckout, AppError> {
    let (Some(plan_type), Some(user_id), Some(email)) = (
        present(&request.plan_type),
        present(&request.user_id),
        present(&request.email),
    ) else {
        return Err(AppError::bad_request(
            ErrorCode::MissingCheckoutFields,
            MISSING_FIELDS_MESSAGE,
        ));
    };

    let plan = PlanType::parse(plan_type)
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidPlanType, INVALID_PLAN_MESSAGE))?;

    let price_id = prices
        .price_id(plan)
        .ok_or_else(|| AppError::bad_request(ErrorCode::PriceNotConfigured, PRICE_NOT_FOUND_MESSAGE))?;

    Ok(ValidCheckout {
        plan,
        price_id: price_id.to_string(),
        user_id: user_id.to_string(),
        email: email.to_string(),
    })
}

/// Return URLs for a checkout started from `public_base_url`.
pub fn return_urls(public_base_url: &str) -> (String, String) {
    let base = public_base_url.trim_end_matches('/');
    (
        format!("{base}/?session_id={{CHECKOUT_SESSION_ID}}"),
        format!("{base}/subscribe"),
    )
}

/// Validate the selection and open a checkout session; returns its URL.
pub async fn start_checkout(
    gateway: &dyn PaymentGateway,
    prices: &PriceCatalog,
    public_base_url: &str,
    request: &CheckoutRequest,
) -> Result<String, AppError> {
    let valid = validate(request, prices)?;
    let (success_url, cancel_url) = return_urls(public_base_url);

    let session_request = CheckoutSessionRequest {
        plan: valid.plan,
        price_id: valid.price_id,
        user_id: valid.user_id,
        customer_email: valid.email,
        success_url,
        cancel_url,
    };

    let session = gateway
        .create_checkout_session(&session_request)
        .await
        .map_err(|e| {
            error!(
                user_id = %session_request.user_id,
                email = %Redacted(&session_request.customer_email),
                error = %e,
                "checkout session creation failed"
            );
            AppError::upstream(ErrorCode::PaymentProviderError, e.to_string())
        })?;

    info!(
        user_id = %session_request.user_id,
        plan = %session_request.plan,
        session_id = %session.id,
        "checkout session created"
    );
    Ok(session.url)
}
