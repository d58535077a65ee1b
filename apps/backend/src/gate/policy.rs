//! Gate decisions.
//!
//! [`evaluate`] settles everything that depends only on the route class and
//! sign-in state. Meal-plan and profile routes for signed-in users need a
//! subscription lookup first; its outcome goes through
//! [`decide_after_lookup`].

use super::routes::RouteClass;
use super::subscription_check::SubscriptionCheckError;

pub const SIGN_UP_PATH: &str = "/sign-up";
pub const SUBSCRIBE_PATH: &str = "/subscribe";
pub const MEAL_PLAN_PATH: &str = "/mealplan";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    RedirectSignUp,
    RedirectSubscribe,
    RedirectMealPlan,
}

impl GateDecision {
    /// Redirect target, or `None` for [`GateDecision::Continue`].
    pub fn location(self) -> Option<&'static str> {
        match self {
            Self::Continue => None,
            Self::RedirectSignUp => Some(SIGN_UP_PATH),
            Self::RedirectSubscribe => Some(SUBSCRIBE_PATH),
            Self::RedirectMealPlan => Some(MEAL_PLAN_PATH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStep {
    Decided(GateDecision),
    CheckSubscription,
}

pub fn evaluate(class: RouteClass, signed_in: bool) -> GateStep {
    match class {
        RouteClass::StatusCheck => GateStep::Decided(GateDecision::Continue),
        _ if !class.is_public() && !signed_in => GateStep::Decided(GateDecision::RedirectSignUp),
        RouteClass::SignUp if signed_in => GateStep::Decided(GateDecision::RedirectMealPlan),
        _ if class.requires_subscription() => GateStep::CheckSubscription,
        _ => GateStep::Decided(GateDecision::Continue),
    }
}

/// Outcome of asking the status endpoint.
#[derive(Debug)]
pub enum SubscriptionLookup {
    Active,
    Inactive,
    /// The lookup itself failed. The gate fails closed on this.
    Unavailable(SubscriptionCheckError),
}

impl From<Result<bool, SubscriptionCheckError>> for SubscriptionLookup {
    fn from(result: Result<bool, SubscriptionCheckError>) -> Self {
        match result {
            Ok(true) => Self::Active,
            Ok(false) => Self::Inactive,
            Err(err) => Self::Unavailable(err),
        }
    }
}

pub fn decide_after_lookup(lookup: &SubscriptionLookup) -> GateDecision {
    match lookup {
        SubscriptionLookup::Active => GateDecision::Continue,
        SubscriptionLookup::Inactive => GateDecision::RedirectSubscribe,
        SubscriptionLookup::Unavailable(_) => GateDecision::RedirectSubscribe,
    }
}
