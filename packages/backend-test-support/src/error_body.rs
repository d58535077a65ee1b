//! Error body test helpers
//!
//! Asserts the `{error, code, status, trace_id}` contract without depending
//! on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    error: String,
    code: String,
    status: u16,
    trace_id: String,
}

/// Assert that a ServiceResponse conforms to the stable error contract:
/// - HTTP status matches expected
/// - x-trace-id header exists and matches body trace_id
/// - `code` matches, and `error` contains the expected text when given
///
/// Returns the user-facing `error` message for further checks.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_error_contains: Option<&str>,
) -> String {
    assert_eq!(resp.status(), expected_status);

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let parsed: ErrorBodyLike =
        serde_json::from_slice(&body).expect("response body should be an error JSON body");

    assert_eq!(
        parsed.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );
    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.status, expected_status.as_u16());

    if let Some(expected) = expected_error_contains {
        assert!(
            parsed.error.contains(expected),
            "Expected error to contain '{}', but got '{}'",
            expected,
            parsed.error
        );
    }

    parsed.error
}
