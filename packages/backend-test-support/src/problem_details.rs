//! Problem Details assertions that do not depend on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Mirror of the backend's problem+json body.
#[derive(Debug, Deserialize, Serialize)]
struct Problem {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Check status, the `x-trace-id` header against the body's `trace_id`,
/// the error `code`, and optionally a substring of `detail`.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(
        status,
        expected_status,
        "unexpected status for {expected_code}: {}",
        String::from_utf8_lossy(body_bytes)
    );

    let problem: Problem = serde_json::from_slice(body_bytes).unwrap_or_else(|e| {
        panic!(
            "not a problem+json body ({e}): {}",
            String::from_utf8_lossy(body_bytes)
        )
    });

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());

    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "Expected detail to contain '{}', but got '{}'",
            expected_detail,
            problem.detail
        );
    }
}

/// Same checks as [`assert_problem_details_from_parts`] on a test response,
/// plus the `application/problem+json` content type.
pub async fn assert_problem_details(
    resp: actix_web::dev::ServiceResponse,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    assert_eq!(
        headers
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json"),
        "error responses are problem+json"
    );
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}

/// The `code` field of a problem+json body, if it parses as one.
pub fn problem_code(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Problem>(body)
        .ok()
        .map(|p| p.code)
}
