use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::support::{call, create_test_app, TestState};

#[actix_web::test]
async fn healthy_database_reports_latest_migration() {
    let app = create_test_app(TestState::default().build().await).await;

    let resp = call(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250301_000001_profiles");
    assert!(body.get("db_error").is_none());
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn missing_database_is_degraded_but_still_200() {
    let app = create_test_app(TestState::default().without_db().build().await).await;

    let resp = call(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].as_str().unwrap().contains("DB unavailable"));
}

#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let app = create_test_app(TestState::default().build().await).await;

    let resp = call(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));
}
