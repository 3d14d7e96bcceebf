//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the registration and health endpoints along with the
//! request, response, and error envelopes. Swagger UI serves it in debug
//! builds and the `openapi-dump` binary prints it.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::users::{RegisterRequest, RegisterResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registration API",
        description = "Open registration of unique usernames and email addresses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(RegisterRequest, RegisterResponse, ErrorBody)),
    tags(
        (name = "users", description = "User registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
