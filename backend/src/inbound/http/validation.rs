//! Request body validation for inbound HTTP adapters.
//!
//! Failures are reported as a list of field errors, each with a `loc` path,
//! a human-readable `msg`, and a machine-readable `type`. All invalid fields
//! are reported together, not just the first.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domain::Error;

/// Largest accepted JSON body, in bytes.
const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Message attached to every validation [`Error`].
pub(crate) const VALIDATION_FAILED: &str = "request validation failed";

/// Machine-readable validation failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorKind {
    Missing,
    StringType,
    JsonInvalid,
}

impl FieldErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::StringType => "string_type",
            Self::JsonInvalid => "json_invalid",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

/// One invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    field: Option<FieldName>,
    message: String,
    kind: FieldErrorKind,
}

impl FieldError {
    pub(crate) fn new(field: FieldName, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
            kind,
        }
    }

    fn body(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
            kind,
        }
    }

    fn to_json(&self) -> Value {
        let loc = match self.field {
            Some(field) => json!(["body", field.as_str()]),
            None => json!(["body"]),
        };
        json!({
            "loc": loc,
            "msg": self.message,
            "type": self.kind.as_str(),
        })
    }
}

/// Collapse field errors into a single domain validation error.
pub(crate) fn validation_error(errors: &[FieldError]) -> Error {
    Error::invalid_request(VALIDATION_FAILED)
        .with_details(Value::Array(errors.iter().map(FieldError::to_json).collect()))
}

/// Extract a required string field from a JSON object.
pub(crate) fn required_string(body: &Map<String, Value>, field: FieldName) -> Result<String, FieldError> {
    match body.get(field.as_str()) {
        None => Err(FieldError::new(field, FieldErrorKind::Missing, "Field required")),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(FieldError::new(
            field,
            FieldErrorKind::StringType,
            "Input should be a valid string",
        )),
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejecting unparseable JSON body");
    let message = match &err {
        JsonPayloadError::ContentType => "Expected a JSON request body".to_owned(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "JSON body is too large".to_owned()
        }
        _ => format!("JSON decode error: {err}"),
    };
    validation_error(&[FieldError::body(FieldErrorKind::JsonInvalid, message)]).into()
}

/// JSON extractor configuration turning unparseable bodies into validation
/// errors instead of Actix's default plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}
