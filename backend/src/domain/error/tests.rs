//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::Conflict, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::conflict("taken") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn details_are_preserved() {
    let error = Error::invalid_request("bad").with_details(json!([{"loc": ["body", "email"]}]));
    assert_eq!(
        error.details(),
        Some(&json!([{"loc": ["body", "email"]}]))
    );
}

#[rstest]
fn error_code_serialises_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::InvalidRequest).expect("serialise code");
    assert_eq!(value, json!("invalid_request"));
}
