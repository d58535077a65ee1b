//! SeaORM adapter for the `profiles` table.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;

use crate::entities::profiles;

pub async fn find_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find_by_id(user_id.to_string())
        .one(conn)
        .await
}

/// Insert an inactive profile unless one already exists for `user_id`.
///
/// Returns the stored row and whether this call created it. A concurrent
/// insert that wins the race is returned as the existing row.
pub async fn ensure_default<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    email: &str,
) -> Result<(profiles::Model, bool), sea_orm::DbErr> {
    if let Some(existing) = find_by_user_id(conn, user_id).await? {
        return Ok((existing, false));
    }

    let now = OffsetDateTime::now_utc();
    let active = profiles::ActiveModel {
        user_id: Set(user_id.to_string()),
        email: Set(email.to_string()),
        subscription_active: Set(false),
        subscription_tier: Set(None),
        stripe_subscription_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match active.insert(conn).await {
        Ok(model) => Ok((model, true)),
        Err(err) => match find_by_user_id(conn, user_id).await? {
            Some(existing) => Ok((existing, false)),
            None => Err(err),
        },
    }
}
