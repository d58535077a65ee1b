use super::{must_var, opt_var, var_or};
use crate::error::AppError;
use crate::payments::plans::PlanType;

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Provider price identifiers per plan. A plan with no configured price is
/// still a valid plan type; checkout rejects it separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceCatalog {
    weekly: Option<String>,
    monthly: Option<String>,
    yearly: Option<String>,
}

impl PriceCatalog {
    pub fn new(
        weekly: Option<String>,
        monthly: Option<String>,
        yearly: Option<String>,
    ) -> Self {
        Self {
            weekly,
            monthly,
            yearly,
        }
    }

    pub fn from_env() -> Self {
        Self {
            weekly: opt_var(PlanType::Week.price_env_var()),
            monthly: opt_var(PlanType::Month.price_env_var()),
            yearly: opt_var(PlanType::Year.price_env_var()),
        }
    }

    pub fn price_id(&self, plan: PlanType) -> Option<&str> {
        match plan {
            PlanType::Week => self.weekly.as_deref(),
            PlanType::Month => self.monthly.as_deref(),
            PlanType::Year => self.yearly.as_deref(),
        }
    }
}

/// Payment provider settings.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
    /// Public site origin used to build success and cancel URLs.
    pub public_base_url: String,
    pub prices: PriceCatalog,
}

impl StripeConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            secret_key: must_var("STRIPE_SECRET_KEY")?,
            api_base: var_or("STRIPE_API_BASE", DEFAULT_STRIPE_API_BASE),
            public_base_url: var_or("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL),
            prices: PriceCatalog::from_env(),
        })
    }
}
