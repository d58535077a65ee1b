//! Error codes for the meal plan backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the `code` field of
//! the JSON error body.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// No signed-in session on an API handler
    Unauthorized,

    // Request Validation
    /// Body could not be read or parsed
    BadRequest,
    /// Checkout request is missing plan type, user id or email
    MissingCheckoutFields,
    /// Plan type outside the allow-list
    InvalidPlanType,
    /// Plan type is valid but no provider price is configured
    PriceNotConfigured,
    /// Subscription check without a user id
    MissingUserId,

    // Upstream services
    /// Payment provider rejected or failed the request
    PaymentProviderError,
    /// Completion API failed
    MealPlanGenerationFailed,
    /// Completion text was not a valid meal plan
    MealPlanParseFailed,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",

            Self::BadRequest => "BAD_REQUEST",
            Self::MissingCheckoutFields => "MISSING_CHECKOUT_FIELDS",
            Self::InvalidPlanType => "INVALID_PLAN_TYPE",
            Self::PriceNotConfigured => "PRICE_NOT_CONFIGURED",
            Self::MissingUserId => "MISSING_USER_ID",

            Self::PaymentProviderError => "PAYMENT_PROVIDER_ERROR",
            Self::MealPlanGenerationFailed => "MEAL_PLAN_GENERATION_FAILED",
            Self::MealPlanParseFailed => "MEAL_PLAN_PARSE_FAILED",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
