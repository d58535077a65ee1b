use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CurrentUser;
use crate::logging::pii::Redacted;
use crate::repos::profiles::{self, SubscriptionRecord};

pub const PROFILE_CREATED_MESSAGE: &str = "Profile created successfully.";
pub const PROFILE_EXISTS_MESSAGE: &str = "Profile already exists.";
pub const SUBSCRIPTION_FETCH_FAILED_MESSAGE: &str = "Failed to fetch subscription details.";
pub const MISSING_USER_ID_MESSAGE: &str = "userId is required.";

/// The caller's subscription record. Storage failures carry the
/// user-facing fetch message.
pub async fn subscription_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user: &CurrentUser,
) -> Result<Option<SubscriptionRecord>, AppError> {
    profiles::find_subscription(conn, &user.user_id)
        .await
        .map_err(|e| {
            tracing::error!(user_id = %user.user_id, error = %e, "subscription lookup failed");
            AppError::db(SUBSCRIPTION_FETCH_FAILED_MESSAGE)
        })
}

/// Status lookup used by the gate. `user_id` comes from the query string.
pub async fn subscription_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: Option<&str>,
) -> Result<bool, AppError> {
    let user_id = user_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request(ErrorCode::MissingUserId, MISSING_USER_ID_MESSAGE))?;
    profiles::is_subscription_active(conn, user_id).await
}

/// Ensure the caller has a profile row; returns the response message.
pub async fn sync_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user: &CurrentUser,
) -> Result<&'static str, AppError> {
    let created = profiles::ensure_profile(conn, &user.user_id, &user.email).await?;
    if created {
        info!(user_id = %user.user_id, email = %Redacted(&user.email), "profile created");
        Ok(PROFILE_CREATED_MESSAGE)
    } else {
        Ok(PROFILE_EXISTS_MESSAGE)
    }
}
