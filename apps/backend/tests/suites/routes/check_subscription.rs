use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use backend_test_support::unique_helpers::unique_user_id;
use serde_json::Value;

use crate::support::{call, create_test_app, seed_profile, TestState};

async fn active_flag<S, B>(app: &S, uri: &str) -> bool
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody + 'static,
{
    let resp = call(app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    body["subscriptionActive"].as_bool().expect("boolean flag")
}

#[actix_web::test]
async fn reports_active_and_inactive_records() {
    let state = TestState::default().build().await;
    let paid = unique_user_id();
    let lapsed = unique_user_id();
    seed_profile(state.db().unwrap(), &paid, "paid@example.test", true, Some("week")).await;
    seed_profile(state.db().unwrap(), &lapsed, "lapsed@example.test", false, None).await;
    let app = create_test_app(state).await;

    assert!(active_flag(&app, &format!("/api/check-subscription?userId={paid}")).await);
    assert!(!active_flag(&app, &format!("/api/check-subscription?userId={lapsed}")).await);
}

#[actix_web::test]
async fn unknown_user_is_inactive() {
    let app = create_test_app(TestState::default().build().await).await;

    assert!(!active_flag(&app, "/api/check-subscription?userId=user_missing").await);
}

#[actix_web::test]
async fn missing_user_id_is_a_bad_request() {
    let app = create_test_app(TestState::default().build().await).await;

    for uri in ["/api/check-subscription", "/api/check-subscription?userId="] {
        let resp = call(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_error_body(resp, StatusCode::BAD_REQUEST, "MISSING_USER_ID", None).await;
    }
}

#[actix_web::test]
async fn unparsable_query_gets_the_json_error_body() {
    let app = create_test_app(TestState::default().build().await).await;

    let resp = call(
        &app,
        test::TestRequest::get()
            .uri("/api/check-subscription?userId=user_a&userId=user_b")
            .to_request(),
    )
    .await;
    assert_error_body(
        resp,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("Invalid query string"),
    )
    .await;
}

#[actix_web::test]
async fn missing_database_is_a_server_error() {
    let app = create_test_app(TestState::default().without_db().build().await).await;

    let resp = call(
        &app,
        test::TestRequest::get()
            .uri("/api/check-subscription?userId=user_1")
            .to_request(),
    )
    .await;
    assert_error_body(resp, StatusCode::INTERNAL_SERVER_ERROR, "DB_UNAVAILABLE", None).await;
}
