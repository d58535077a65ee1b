use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::repos::profiles::SubscriptionRecord;
use crate::services::profiles::{subscription_for, sync_profile, SUBSCRIPTION_FETCH_FAILED_MESSAGE};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct SubscriptionStatusResponse {
    subscription: Option<SubscriptionRecord>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// `GET /api/profile/subscription-status`: read-only.
async fn subscription_status(
    app_state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state).map_err(|_| AppError::db(SUBSCRIPTION_FETCH_FAILED_MESSAGE))?;
    let subscription = subscription_for(db, &user).await?;
    Ok(HttpResponse::Ok().json(SubscriptionStatusResponse { subscription }))
}

/// `POST /api/create-profile`: idempotent.
async fn create_profile(
    app_state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let message = sync_profile(db, &user).await?;
    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/profile/subscription-status",
        web::get().to(subscription_status),
    )
    .route("/api/create-profile", web::post().to(create_profile));
}
