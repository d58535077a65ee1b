use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use mealplan_backend::ai::{CompletionParams, OpenRouterModel};
use mealplan_backend::config::app::AppConfig;
use mealplan_backend::gate::HttpSubscriptionCheck;
use mealplan_backend::infra::state::StateBuilder;
use mealplan_backend::middleware::{
    cors_middleware, AuthGate, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use mealplan_backend::payments::StripeGateway;
use mealplan_backend::routes;
use mealplan_backend::state::security_config::SecurityConfig;
use mealplan_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let http = reqwest::Client::new();
    let completion_params = CompletionParams {
        temperature: config.completions.temperature,
        max_tokens: config.completions.max_tokens,
    };

    let app_state = match StateBuilder::new(SecurityConfig::new(config.session_secret.as_bytes()))
        .with_db_url(config.database_url.clone())
        .with_payments(Arc::new(StripeGateway::new(http.clone(), &config.stripe)))
        .with_prices(config.stripe.prices.clone())
        .with_public_base_url(config.stripe.public_base_url.clone())
        .with_completions(
            Arc::new(OpenRouterModel::new(http.clone(), &config.completions)),
            completion_params,
        )
        .with_subscription_check(Arc::new(HttpSubscriptionCheck::new(
            http,
            config.subscription_check_base_url.clone(),
        )))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting meal plan backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(AuthGate)
            .wrap(SecurityHeaders)
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
