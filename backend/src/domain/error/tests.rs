//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn display_renders_message_only() {
    let err = Error::internal("Failed to read profile");
    assert_eq!(err.to_string(), "Failed to read profile");
}

#[rstest]
fn errors_outside_a_request_have_no_trace_id() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn errors_capture_the_scoped_trace_id() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let err = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(err.trace_id(), Some(Uuid::nil().to_string().as_str()));
}
