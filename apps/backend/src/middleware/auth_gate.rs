//! Route authorization gate.
//!
//! Runs before every handler. It resolves the session, classifies the path,
//! and either lets the request through or answers with a `307` redirect to
//! `/sign-up`, `/subscribe` or `/mealplan`. Static assets outside `/api`
//! bypass it. The resolved identity is stored in request extensions for
//! the `CurrentUser` extractor.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::session::{resolve_session, SessionIdentity};
use crate::error::AppError;
use crate::gate::routes::is_static_asset;
use crate::gate::{decide_after_lookup, evaluate, GateDecision, GateStep, RouteRules, SubscriptionLookup};
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
}

async fn lookup_subscription(
    state: &AppState,
    req: &ServiceRequest,
    identity: &SessionIdentity,
) -> SubscriptionLookup {
    let origin = {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    };
    let cookie = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());

    let result = state
        .subscription_check
        .is_active(&origin, &identity.user_id, cookie)
        .await;
    SubscriptionLookup::from(result)
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let path = req.path().to_string();
            if is_static_asset(&path) {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let identity = resolve_session(req.headers(), &state.security);
            let class = RouteRules::standard().classify(&path);

            let decision = match (evaluate(class, identity.is_some()), identity.as_ref()) {
                (GateStep::Decided(decision), _) => decision,
                (GateStep::CheckSubscription, Some(identity)) => {
                    let lookup = lookup_subscription(&state, &req, identity).await;
                    if let SubscriptionLookup::Unavailable(err) = &lookup {
                        security::subscription_check_unavailable(
                            &path,
                            &identity.user_id,
                            &err.to_string(),
                        );
                    }
                    decide_after_lookup(&lookup)
                }
                (GateStep::CheckSubscription, None) => GateDecision::RedirectSignUp,
            };

            debug!(path = %path, ?class, ?decision, "gate decision");

            match decision.location() {
                None => {
                    if let Some(identity) = identity {
                        req.extensions_mut().insert(identity);
                    }
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Some(location) => {
                    if decision == GateDecision::RedirectSignUp {
                        security::sign_in_required(&path);
                    }
                    let response = HttpResponse::TemporaryRedirect()
                        .insert_header((header::LOCATION, location))
                        .finish();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
