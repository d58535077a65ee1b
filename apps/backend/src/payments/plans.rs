use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing interval a user can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Week,
    Month,
    Year,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::Week, PlanType::Month, PlanType::Year];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Parse a plan from the allow-list; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plan| plan.as_str() == value)
    }

    /// Environment variable holding the provider price id for this plan.
    pub const fn price_env_var(&self) -> &'static str {
        match self {
            Self::Week => "STRIPE_PRICE_WEEKLY",
            Self::Month => "STRIPE_PRICE_MONTHLY",
            Self::Year => "STRIPE_PRICE_YEARLY",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
