use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Meal plan backend"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

async fn db_status(app_state: &AppState) -> Result<String, String> {
    let db = require_db(app_state).map_err(|e| format!("DB unavailable: {e}"))?;
    db.query_one(sea_orm::Statement::from_string(
        db.get_database_backend(),
        "SELECT 1 as health_check".to_string(),
    ))
    .await
    .map_err(|e| format!("DB query failed: {e}"))?;

    Ok(match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    })
}

/// Always 200; a broken database shows up as `status: degraded`.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let response = match db_status(&app_state).await {
        Ok(migrations) => HealthResponse {
            status: "ok",
            app_version: env!("CARGO_PKG_VERSION"),
            db: "ok",
            db_error: None,
            migrations,
            time,
        },
        Err(db_error) => HealthResponse {
            status: "degraded",
            app_version: env!("CARGO_PKG_VERSION"),
            db: "error",
            db_error: Some(db_error),
            migrations: "unknown".to_string(),
            time,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
