//! Route authorization gate.
//!
//! `routes` classifies a path, `policy` turns the class plus sign-in state
//! into a decision, and `subscription_check` asks the status endpoint when
//! the policy needs to know about billing. The actix wiring lives in
//! `middleware::auth_gate`.

pub mod policy;
pub mod routes;
pub mod subscription_check;

pub use policy::{decide_after_lookup, evaluate, GateDecision, GateStep, SubscriptionLookup};
pub use routes::{RouteClass, RouteRules, STATUS_CHECK_PATH};
pub use subscription_check::{HttpSubscriptionCheck, SubscriptionCheck, SubscriptionCheckError};
