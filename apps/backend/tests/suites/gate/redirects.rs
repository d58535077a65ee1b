use actix_web::http::{header, StatusCode};
use actix_web::test;

use crate::support::{call, create_gated_app, session_cookie, TestState};

fn location(resp: &actix_web::dev::ServiceResponse<actix_web::body::BoxBody>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect has a location")
        .to_str()
        .unwrap()
}

#[actix_web::test]
async fn anonymous_visitors_are_sent_to_sign_up() {
    let fixture = TestState::default();
    let app = create_gated_app(fixture.build().await).await;

    for uri in ["/mealplan", "/mealplan/week-2", "/profile", "/api/generate-mealplan"] {
        let resp = call(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
        assert_eq!(location(&resp), "/sign-up", "{uri}");
    }
    assert!(fixture.check.calls().is_empty());
}

#[actix_web::test]
async fn forged_session_counts_as_anonymous() {
    let app = create_gated_app(TestState::default().build().await).await;

    let req = test::TestRequest::get()
        .uri("/mealplan")
        .insert_header(("cookie", "__session=not.a.jwt"))
        .to_request();
    let resp = call(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/sign-up");
}

#[actix_web::test]
async fn signed_in_users_skip_sign_up() {
    let app = create_gated_app(TestState::default().build().await).await;

    for uri in ["/sign-up", "/sign-up/verify"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(session_cookie("user_signed_in", "in@example.test"))
            .to_request();
        let resp = call(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
        assert_eq!(location(&resp), "/mealplan", "{uri}");
    }
}

#[actix_web::test]
async fn redirects_carry_security_headers_and_trace_id() {
    let app = create_gated_app(TestState::default().build().await).await;

    let resp = call(&app, test::TestRequest::get().uri("/profile").to_request()).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(resp.headers().contains_key("x-trace-id"));
    assert_eq!(
        resp.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(resp.headers().get("x-frame-options").unwrap(), "DENY");
}
