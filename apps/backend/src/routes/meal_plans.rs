use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::meal_plans::{generate, MealPreferences};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MealPlanResponse {
    meal_plan: Map<String, Value>,
}

async fn generate_meal_plan(
    app_state: web::Data<AppState>,
    user: CurrentUser,
    body: ValidatedJson<MealPreferences>,
) -> Result<HttpResponse, AppError> {
    let meal_plan = generate(
        app_state.completions.as_ref(),
        app_state.completion_params,
        &body,
    )
    .await?;

    info!(user_id = %user.user_id, days = meal_plan.len(), "meal plan generated");
    Ok(HttpResponse::Ok().json(MealPlanResponse { meal_plan }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/generate-mealplan", web::post().to(generate_meal_plan));
}
