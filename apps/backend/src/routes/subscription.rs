use actix_web::error::QueryPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::profiles::subscription_active;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckQuery {
    user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckResponse {
    subscription_active: bool,
}

/// `GET /api/check-subscription?userId=...`, called by the gate.
async fn check_subscription(
    app_state: web::Data<AppState>,
    query: web::Query<CheckQuery>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let active = subscription_active(db, query.user_id.as_deref()).await?;
    Ok(HttpResponse::Ok().json(CheckResponse {
        subscription_active: active,
    }))
}

/// Query strings serde rejects get the standard error body instead of
/// actix's plain-text 400.
fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected check-subscription query");
    AppError::bad_request(ErrorCode::BadRequest, "Invalid query string").into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/check-subscription")
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .route(web::get().to(check_subscription)),
    );
}
