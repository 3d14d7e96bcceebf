//! Handler tests for `POST /register` against a stub registration port.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::Trace;
use crate::domain::ports::UserRegistration;
use crate::domain::{DUPLICATE_USER_MESSAGE, Error, TRACE_ID_HEADER, User, UserId};
use crate::inbound::http::configure;
use crate::inbound::http::error::INTERNAL_ERROR_DETAIL;
use crate::inbound::http::health::HealthState;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use async_trait::async_trait;
use rstest::{fixture, rstest};
use serde_json::json;

#[derive(Clone, Copy)]
enum StubOutcome {
    Registered,
    Conflict,
    Internal,
}

struct StubRegistration {
    outcome: StubOutcome,
    calls: AtomicUsize,
}

impl StubRegistration {
    fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRegistration for StubRegistration {
    async fn register(&self, user: NewUser) -> Result<User, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            StubOutcome::Registered => Ok(User::new(
                UserId::from_raw(1),
                user.username().clone(),
                user.email().clone(),
            )),
            StubOutcome::Conflict => Err(Error::conflict(DUPLICATE_USER_MESSAGE)),
            StubOutcome::Internal => Err(Error::internal("disk I/O error")),
        }
    }
}

#[derive(Clone, Default)]
struct RecordingRegistration {
    seen: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl UserRegistration for RecordingRegistration {
    async fn register(&self, user: NewUser) -> Result<User, Error> {
        self.seen.lock().expect("seen lock").push((
            user.username().to_string(),
            user.email().to_string(),
        ));
        Ok(User::new(
            UserId::from_raw(1),
            user.username().clone(),
            user.email().clone(),
        ))
    }
}

#[fixture]
fn registered() -> Arc<StubRegistration> {
    StubRegistration::new(StubOutcome::Registered)
}

async fn post_register(
    registration: Arc<StubRegistration>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let state = web::Data::new(HttpState::new(registration));
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .app_data(web::Data::new(HealthState::new()))
            .configure(configure),
    )
    .await;
    let response = actix_test::call_service(&app, request.uri("/register").to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}

fn json_request(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().set_json(body)
}

#[rstest]
#[actix_web::test]
async fn register_returns_confirmation(registered: Arc<StubRegistration>) {
    let (status, body) = post_register(
        registered.clone(),
        json_request(json!({"username": "shoaib", "email": "shoaib@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User registered successfully"}));
    assert_eq!(registered.calls(), 1);
}

#[rstest]
#[actix_web::test]
async fn register_accepts_typed_request_body(registered: Arc<StubRegistration>) {
    let request = actix_test::TestRequest::post().set_json(RegisterRequest {
        username: "testuser".into(),
        email: "test@example.com".into(),
    });

    let (status, body) = post_register(registered, request).await;

    assert_eq!(status, StatusCode::OK);
    let response: RegisterResponse = serde_json::from_value(body).expect("response shape");
    assert_eq!(response.message, REGISTERED_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn register_ignores_unknown_fields(registered: Arc<StubRegistration>) {
    let (status, _) = post_register(
        registered,
        json_request(json!({"username": "a", "email": "x@example.com", "role": "admin"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn register_maps_conflict_to_bad_request() {
    let registration = StubRegistration::new(StubOutcome::Conflict);

    let (status, body) = post_register(
        registration,
        json_request(json!({"username": "testuser", "email": "test@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Username or email already exists."}));
}

#[rstest]
#[actix_web::test]
async fn register_redacts_internal_failures() {
    let registration = StubRegistration::new(StubOutcome::Internal);

    let (status, body) = post_register(
        registration,
        json_request(json!({"username": "shoaib", "email": "shoaib@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": INTERNAL_ERROR_DETAIL}));
}

#[rstest]
#[case(
    json!({"username": "shoaib"}),
    json!([{"loc": ["body", "email"], "msg": "Field required", "type": "missing"}])
)]
#[case(
    json!({"email": "shoaib@example.com"}),
    json!([{"loc": ["body", "username"], "msg": "Field required", "type": "missing"}])
)]
#[case(
    json!({}),
    json!([
        {"loc": ["body", "username"], "msg": "Field required", "type": "missing"},
        {"loc": ["body", "email"], "msg": "Field required", "type": "missing"}
    ])
)]
#[case(
    json!({"username": 42, "email": "shoaib@example.com"}),
    json!([{"loc": ["body", "username"], "msg": "Input should be a valid string", "type": "string_type"}])
)]
#[case(
    json!({"username": null, "email": ["shoaib@example.com"]}),
    json!([
        {"loc": ["body", "username"], "msg": "Input should be a valid string", "type": "string_type"},
        {"loc": ["body", "email"], "msg": "Input should be a valid string", "type": "string_type"}
    ])
)]
#[actix_web::test]
async fn register_rejects_invalid_fields_before_storage(
    registered: Arc<StubRegistration>,
    #[case] request: Value,
    #[case] expected_detail: Value,
) {
    let (status, body) = post_register(registered.clone(), json_request(request)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"detail": expected_detail}));
    assert_eq!(registered.calls(), 0, "validation failures never reach storage");
}

#[rstest]
#[case::malformed_json(
    actix_test::TestRequest::post()
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": ")
)]
#[case::array_body(json_request(json!(["shoaib", "shoaib@example.com"])))]
#[case::missing_content_type(actix_test::TestRequest::post().set_payload("username=shoaib"))]
#[actix_web::test]
async fn register_rejects_unparseable_bodies(
    registered: Arc<StubRegistration>,
    #[case] request: actix_test::TestRequest,
) {
    let (status, body) = post_register(registered.clone(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().expect("detail list");
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!(["body"]));
    assert_eq!(detail[0]["type"], json!("json_invalid"));
    assert_eq!(registered.calls(), 0);
}

#[rstest]
#[actix_web::test]
async fn error_responses_carry_trace_header() {
    let state = web::Data::new(HttpState::new(StubRegistration::new(StubOutcome::Conflict)));
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Trace)
            .configure(configure),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        json_request(json!({"username": "a", "email": "x@example.com"}))
            .uri("/register")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

#[rstest]
#[case::blank_username(json!({"username": "", "email": "foo"}))]
#[case::whitespace(json!({"username": "   ", "email": "not-an-email"}))]
#[case::long_username(json!({"username": "u".repeat(300), "email": "x@example.com"}))]
#[actix_web::test]
async fn register_passes_any_string_through_verbatim(#[case] request: Value) {
    let recorder = RecordingRegistration::default();
    let state = web::Data::new(HttpState::new(Arc::new(recorder.clone())));
    let app = actix_test::init_service(App::new().app_data(state).configure(configure)).await;

    let response = actix_test::call_service(
        &app,
        json_request(request.clone()).uri("/register").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let seen = recorder.seen.lock().expect("seen lock").clone();
    assert_eq!(
        seen,
        vec![(
            request["username"].as_str().expect("username").to_owned(),
            request["email"].as_str().expect("email").to_owned(),
        )]
    );
}

#[rstest]
fn parse_new_user_reports_fields_in_order() {
    let body = json!({"email": 1}).as_object().cloned().expect("object");
    let errors = parse_new_user(&body).expect_err("both invalid");
    assert_eq!(errors.len(), 2);
}
