//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as `{"detail": ...}`. Conflicts carry their
//! message verbatim, validation failures carry the per-field list, and
//! internal errors are redacted to a fixed string.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-visible detail for every internal failure.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";

/// Error envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// A message string, or a list of field errors for validation failures.
    #[schema(value_type = Object, example = "Username or email already exists.")]
    pub detail: Value,
}

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error) -> ErrorBody {
    let detail = match error.code() {
        ErrorCode::InvalidRequest => error
            .details()
            .cloned()
            .unwrap_or_else(|| Value::String(error.message().to_owned())),
        ErrorCode::Conflict => Value::String(error.message().to_owned()),
        ErrorCode::InternalError => Value::String(INTERNAL_ERROR_DETAIL.to_owned()),
    };
    ErrorBody { detail }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(
                trace_id = self.trace_id().unwrap_or_default(),
                error = %self,
                "request failed with internal error"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(body_for(self))
    }
}
