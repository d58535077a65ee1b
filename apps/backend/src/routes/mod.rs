use actix_web::web;

pub mod checkout;
pub mod health;
pub mod meal_plans;
pub mod profile;
pub mod subscription;

/// Register every HTTP route. `main` and the integration tests share this,
/// so tests exercise the same paths the server exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(checkout::configure_routes)
        .configure(meal_plans::configure_routes)
        .configure(profile::configure_routes)
        .configure(subscription::configure_routes);
}
