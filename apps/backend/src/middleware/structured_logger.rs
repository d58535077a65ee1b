//! One `request_completed` event per request, levelled by status class.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct Completed<'a> {
    method: &'a str,
    path: &'a str,
    trace_id: &'a str,
    status: StatusCode,
    duration_us: u64,
    location: Option<&'a str>,
}

fn log_completed(c: &Completed<'_>) {
    let status_code = c.status.as_u16();
    let location = c.location.unwrap_or("");
    if c.status.is_server_error() {
        error!(http.method = %c.method, url.path = %c.path, http.status_code = status_code, duration_us = c.duration_us, trace_id = %c.trace_id, "request_completed");
    } else if c.status.is_client_error() {
        warn!(http.method = %c.method, url.path = %c.path, http.status_code = status_code, duration_us = c.duration_us, trace_id = %c.trace_id, "request_completed");
    } else {
        info!(http.method = %c.method, url.path = %c.path, http.status_code = status_code, duration_us = c.duration_us, trace_id = %c.trace_id, redirect = %location, "request_completed");
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, location) = match &result {
                Ok(res) => (
                    res.status(),
                    res.headers()
                        .get(actix_web::http::header::LOCATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            log_completed(&Completed {
                method: &method,
                path: &path,
                trace_id: &trace_id,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                location: location.as_deref(),
            });

            result
        })
    }
}
