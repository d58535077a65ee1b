//! Payment provider integration: plan types, the gateway seam and the
//! Stripe REST implementation.

pub mod gateway;
pub mod plans;
pub mod stripe;

pub use gateway::{CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentGateway};
pub use plans::PlanType;
pub use stripe::StripeGateway;
