use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::checkout::{start_checkout, CheckoutRequest};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CheckoutResponse {
    url: String,
}

/// `POST /api/checkout`. Public: the user id and email come from the body.
async fn create_checkout(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let url = start_checkout(
        app_state.payments.as_ref(),
        &app_state.prices,
        &app_state.public_base_url,
        &body,
    )
    .await?;

    Ok(HttpResponse::Ok().json(CheckoutResponse { url }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/checkout", web::post().to(create_checkout));
}
