//! Repository layer for subscription records.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::profiles_sea as adapter;
use crate::entities::profiles;
use crate::error::AppError;
use crate::payments::PlanType;

/// A user's subscription state as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub user_id: String,
    pub email: String,
    pub subscription_active: bool,
    pub subscription_tier: Option<PlanType>,
    pub stripe_subscription_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<profiles::Model> for SubscriptionRecord {
    fn from(model: profiles::Model) -> Self {
        // The billing webhook owns this column; unknown values read as no tier.
        let subscription_tier = model.subscription_tier.as_deref().and_then(PlanType::parse);
        Self {
            user_id: model.user_id,
            email: model.email,
            subscription_active: model.subscription_active,
            subscription_tier,
            stripe_subscription_id: model.stripe_subscription_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find_subscription<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<SubscriptionRecord>, AppError> {
    let model = adapter::find_by_user_id(conn, user_id).await?;
    Ok(model.map(SubscriptionRecord::from))
}

/// Whether `user_id` has an active subscription; unknown users are inactive.
pub async fn is_subscription_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<bool, AppError> {
    let model = adapter::find_by_user_id(conn, user_id).await?;
    Ok(model.is_some_and(|m| m.subscription_active))
}

/// Make sure a profile row exists. Returns `true` when one was created.
pub async fn ensure_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    email: &str,
) -> Result<bool, AppError> {
    let (_, created) = adapter::ensure_default(conn, user_id, email).await?;
    Ok(created)
}
