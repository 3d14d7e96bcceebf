//! Registration endpoint.
//!
//! ```text
//! POST /register {"username":"shoaib","email":"shoaib@example.com"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{EmailAddress, NewUser, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldError, FieldName, required_string, validation_error,
};

/// Confirmation returned on a successful registration.
pub const REGISTERED_MESSAGE: &str = "User registered successfully";

const USERNAME: FieldName = FieldName::new("username");
const EMAIL: FieldName = FieldName::new("email");

/// Registration request body for `POST /register`.
///
/// The handler validates the raw JSON object itself so that every invalid
/// field can be reported at once; this type documents the accepted shape.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Requested username; must be unique.
    #[schema(example = "shoaib")]
    pub username: String,
    /// Contact email; must be unique.
    #[schema(example = "shoaib@example.com")]
    pub email: String,
}

/// Success envelope for `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Confirmation text.
    #[schema(example = "User registered successfully")]
    pub message: String,
}

/// Validate the raw request object into a registration command.
///
/// Only presence and string type are checked; the values themselves are
/// passed through verbatim.
fn parse_new_user(body: &Map<String, Value>) -> Result<NewUser, Vec<FieldError>> {
    let username = required_string(body, USERNAME).map(Username::new);
    let email = required_string(body, EMAIL).map(EmailAddress::new);

    match (username, email) {
        (Ok(username), Ok(email)) => Ok(NewUser::new(username, email)),
        (username, email) => Err([username.err(), email.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

/// Register a new user.
///
/// Returns 400 when the username or email is already taken and 422 when the
/// body is missing a field or a field is not a string.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Username or email already exists", body = ErrorBody),
        (status = 422, description = "Request validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let new_user =
        parse_new_user(&payload.into_inner()).map_err(|errors| validation_error(&errors))?;
    state.registration.register(new_user).await?;
    Ok(web::Json(RegisterResponse {
        message: REGISTERED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests;
