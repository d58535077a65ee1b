use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use serde_json::{json, Value};

use crate::support::stubs::StubCompletion;
use crate::support::{bearer, call, create_test_app, TestState};

fn generate(body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/generate-mealplan")
        .insert_header(bearer("user_cook", "cook@example.test"))
        .set_json(body)
        .to_request()
}

fn preferences() -> Value {
    json!({
        "dietType": "vegetarian",
        "calories": 2000,
        "allergies": "",
        "cuisine": "Thai",
        "snacks": true,
        "days": 7
    })
}

#[actix_web::test]
async fn returns_the_plan_with_day_order_preserved() {
    let fixture = TestState::default().with_completion(StubCompletion::replying(
        "\n {\"Tuesday\":{\"Dinner\":\"Curry - 600 calories\"},\"Monday\":{\"Breakfast\":\"Oats - 350 calories\",\"Snacks\":\"Mango - 100 calories\"}} \n",
    ));
    let app = create_test_app(fixture.build().await).await;

    let resp = call(&app, generate(preferences())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(
        text.find("Tuesday").unwrap() < text.find("Monday").unwrap(),
        "day order should survive: {text}"
    );

    let json: Value = serde_json::from_str(text).unwrap();
    assert_eq!(json["mealPlan"]["Monday"]["Snacks"], "Mango - 100 calories");
}

#[actix_web::test]
async fn prompt_and_sampling_follow_the_preferences() {
    let fixture = TestState::default();
    let app = create_test_app(fixture.build().await).await;

    let resp = call(&app, generate(preferences())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let (prompt, params) = fixture.completion.last_prompt().expect("model called");
    assert!(prompt.contains("vegetarian diet aiming for 2000 calories per day"));
    assert!(prompt.contains("Allergies or restrictions: none."));
    assert!(prompt.contains("Preferred cuisine: Thai."));
    assert!(prompt.contains("  - Snacks"));
    assert_eq!(params.temperature, 0.7);
    assert_eq!(params.max_tokens, 1500);
}

#[actix_web::test]
async fn prose_reply_is_a_parse_failure() {
    let fixture = TestState::default()
        .with_completion(StubCompletion::replying("Sure! Here is your meal plan: ..."));
    let app = create_test_app(fixture.build().await).await;

    let resp = call(&app, generate(preferences())).await;
    assert_error_body(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "MEAL_PLAN_PARSE_FAILED",
        Some("Failed to parse meal plan. Please try again."),
    )
    .await;
}

#[actix_web::test]
async fn badly_shaped_plans_are_parse_failures() {
    for reply in ["[\"Monday\"]", "{}", r#"{"Monday":["Oats"]}"#, r#"{"Monday":{"Lunch":500}}"#] {
        let fixture = TestState::default().with_completion(StubCompletion::replying(reply));
        let app = create_test_app(fixture.build().await).await;

        let resp = call(&app, generate(preferences())).await;
        assert_error_body(
            resp,
            StatusCode::INTERNAL_SERVER_ERROR,
            "MEAL_PLAN_PARSE_FAILED",
            None,
        )
        .await;
    }
}

#[actix_web::test]
async fn upstream_failure_asks_to_retry_later() {
    let fixture = TestState::default().with_completion(StubCompletion::unavailable());
    let app = create_test_app(fixture.build().await).await;

    let resp = call(&app, generate(preferences())).await;
    assert_error_body(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "MEAL_PLAN_GENERATION_FAILED",
        Some("Failed to generate meal plan. Please try again later."),
    )
    .await;
}

#[actix_web::test]
async fn anonymous_caller_is_unauthorized() {
    let fixture = TestState::default();
    let app = create_test_app(fixture.build().await).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-mealplan")
        .set_json(preferences())
        .to_request();
    let resp = call(&app, req).await;

    assert_error_body(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED", Some("Unauthorized")).await;
    assert!(fixture.completion.last_prompt().is_none());
}
