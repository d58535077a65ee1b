use mealplan_backend::gate::{HttpSubscriptionCheck, SubscriptionCheck, SubscriptionCheckError};

use crate::support::loopback::{refused_base_url, LoopbackServer};

#[tokio::test]
async fn forwards_user_id_and_cookie_to_the_request_origin() {
    let server = LoopbackServer::replying(200, r#"{"subscriptionActive":true}"#).await;
    let check = HttpSubscriptionCheck::new(reqwest::Client::new(), None);

    let active = check
        .is_active(&server.base_url, "user a&b", Some("__session=abc.def"))
        .await
        .expect("check succeeds");
    assert!(active);

    let request = server.received().await;
    assert_eq!(
        request.request_line(),
        "GET /api/check-subscription?userId=user+a%26b HTTP/1.1"
    );
    assert_eq!(request.header("cookie"), Some("__session=abc.def"));
}

#[tokio::test]
async fn configured_base_url_wins_over_the_request_origin() {
    let server = LoopbackServer::replying(200, r#"{"subscriptionActive":false}"#).await;
    let check = HttpSubscriptionCheck::new(
        reqwest::Client::new(),
        Some(format!("{}/", server.base_url)),
    );
    let unreachable_origin = refused_base_url().await;

    let active = check
        .is_active(&unreachable_origin, "user_1", None)
        .await
        .expect("check goes to the configured base");
    assert!(!active);

    let request = server.received().await;
    assert!(request
        .request_line()
        .starts_with("GET /api/check-subscription?userId=user_1 "));
    assert_eq!(request.header("cookie"), None);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = LoopbackServer::replying(503, r#"{"subscriptionActive":true}"#).await;
    let check = HttpSubscriptionCheck::new(reqwest::Client::new(), None);

    let result = check.is_active(&server.base_url, "user_1", None).await;

    assert!(matches!(result, Err(SubscriptionCheckError::Status(503))));
    server.received().await;
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let check = HttpSubscriptionCheck::new(reqwest::Client::new(), None);

    let result = check.is_active(&refused_base_url().await, "user_1", None).await;

    assert!(matches!(result, Err(SubscriptionCheckError::Transport(_))));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = LoopbackServer::replying(200, "<html>sign in</html>").await;
    let check = HttpSubscriptionCheck::new(reqwest::Client::new(), None);

    let result = check.is_active(&server.base_url, "user_1", None).await;

    assert!(matches!(result, Err(SubscriptionCheckError::MalformedBody(_))));
    server.received().await;
}
