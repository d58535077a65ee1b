use std::sync::Arc;

use mealplan_backend::ai::CompletionParams;
use mealplan_backend::config::payments::PriceCatalog;
use mealplan_backend::entities::profiles;
use mealplan_backend::{AppState, StateBuilder};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use time::OffsetDateTime;

use super::auth::security;
use super::stubs::{CheckAnswer, StubCompletion, StubGateway, StubSubscriptionCheck};

pub const PUBLIC_BASE_URL: &str = "https://meals.example.test";

/// AppState over in-memory SQLite plus handles on every stub, so tests can
/// both drive the app and inspect what it sent out.
pub struct TestState {
    pub gateway: Arc<StubGateway>,
    pub completion: Arc<StubCompletion>,
    pub check: Arc<StubSubscriptionCheck>,
    pub prices: PriceCatalog,
    with_db: bool,
}

impl Default for TestState {
    fn default() -> Self {
        Self {
            gateway: Arc::new(StubGateway::returning_url(
                "https://checkout.stripe.test/c/pay/cs_test_123",
            )),
            completion: Arc::new(StubCompletion::replying(
                r#"{"Monday":{"Breakfast":"Oats - 350 calories"}}"#,
            )),
            check: Arc::new(StubSubscriptionCheck::new(CheckAnswer::Active)),
            prices: PriceCatalog::new(
                Some("price_week".to_string()),
                Some("price_month".to_string()),
                Some("price_year".to_string()),
            ),
            with_db: true,
        }
    }
}

impl TestState {
    pub fn with_gateway(mut self, gateway: StubGateway) -> Self {
        self.gateway = Arc::new(gateway);
        self
    }

    pub fn with_completion(mut self, completion: StubCompletion) -> Self {
        self.completion = Arc::new(completion);
        self
    }

    pub fn with_check(mut self, answer: CheckAnswer) -> Self {
        self.check = Arc::new(StubSubscriptionCheck::new(answer));
        self
    }

    pub fn with_prices(mut self, prices: PriceCatalog) -> Self {
        self.prices = prices;
        self
    }

    pub fn without_db(mut self) -> Self {
        self.with_db = false;
        self
    }

    pub async fn build(&self) -> AppState {
        let mut builder = StateBuilder::new(security())
            .with_payments(self.gateway.clone())
            .with_prices(self.prices.clone())
            .with_public_base_url(PUBLIC_BASE_URL)
            .with_completions(
                self.completion.clone(),
                CompletionParams {
                    temperature: 0.7,
                    max_tokens: 1500,
                },
            )
            .with_subscription_check(self.check.clone());
        if self.with_db {
            builder = builder.with_db_url("sqlite::memory:");
        }
        builder.build().await.expect("build test state")
    }
}

pub async fn seed_profile(
    db: &DatabaseConnection,
    user_id: &str,
    email: &str,
    active: bool,
    tier: Option<&str>,
) -> profiles::Model {
    let now = OffsetDateTime::now_utc();
    profiles::ActiveModel {
        user_id: Set(user_id.to_string()),
        email: Set(email.to_string()),
        subscription_active: Set(active),
        subscription_tier: Set(tier.map(str::to_string)),
        stripe_subscription_id: Set(active.then(|| format!("sub_{user_id}"))),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("seed profile")
}
