// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process stub backend for client tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::macros::datetime;
use tokio::task::JoinHandle;

use crate::{ApiClient, ClientConfig};

pub const ADMIN_PASSWORD: &str = "secret";
pub const ADMIN_TOKEN: &str = "token-123";

/// A request the stub received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// How the stub answers.
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub courses_body: String,
    pub classes_fail: bool,
    pub window: Value,
    pub availability: Option<Value>,
    /// Served by the availability route once a registration was posted.
    pub availability_after_submit: Option<Value>,
    /// Message-only admin routes answer 204 / empty 200 instead of `{message}`.
    pub empty_admin_replies: bool,
    pub submit_status: StatusCode,
    pub submit_body: String,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            courses_body: json!([
                {"id": 1, "name": "Ballet", "price": 3600, "sessions": 12, "frequency": "weekly"},
                {"id": 2, "name": "Jazz", "price": 3200, "sessions": 12, "frequency": "weekly"},
                {"id": 3, "name": "Hip Hop", "price": 3000}
            ])
            .to_string(),
            classes_fail: false,
            window: json!({"start": "2026-03-01T00:00:00Z", "end": "2026-03-31T00:00:00Z"}),
            availability: Some(json!({"Ballet": -1, "Jazz": 0, "Hip Hop": 4})),
            availability_after_submit: None,
            empty_admin_replies: false,
            submit_status: StatusCode::OK,
            submit_body: json!({"message": "Registered"}).to_string(),
        }
    }
}

#[derive(Clone)]
pub struct StubBackend {
    config: Arc<StubConfig>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubBackend {
    pub fn new(config: StubConfig) -> Self {
        Self {
            config: Arc::new(config),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn record(
        &self,
        method: Method,
        path: impl Into<String>,
        headers: &HeaderMap,
        body: Option<Value>,
    ) {
        let authorization: Option<String> = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.into(),
            authorization,
            body,
        });
    }
}

fn raw_json(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// A `{message}` reply, or an empty one when the stub is set up that way.
fn message_reply(stub: &StubBackend, empty_status: StatusCode, message: &str) -> Response {
    if stub.config.empty_admin_replies {
        return empty_status.into_response();
    }
    Json(json!({"message": message})).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {ADMIN_TOKEN}").as_str())
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Please log in"})),
    )
        .into_response()
}

async fn courses(State(stub): State<StubBackend>) -> Response {
    raw_json(StatusCode::OK, stub.config.courses_body.clone())
}

async fn classes(State(stub): State<StubBackend>) -> Response {
    if stub.config.classes_fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "database unavailable"})),
        )
            .into_response();
    }
    Json(json!(["Sunflower", "Rose"])).into_response()
}

async fn window(State(stub): State<StubBackend>) -> Response {
    Json(stub.config.window.clone()).into_response()
}

async fn availability(State(stub): State<StubBackend>, headers: HeaderMap) -> Response {
    stub.record(Method::GET, "/api/courses/availability", &headers, None);
    let submitted: bool = !stub.requests_to("/submit-registration").is_empty();
    let body: &Option<Value> = match &stub.config.availability_after_submit {
        Some(_) if submitted => &stub.config.availability_after_submit,
        _ => &stub.config.availability,
    };
    match body {
        Some(body) => Json(body.clone()).into_response(),
        None => raw_json(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("<html>oops</html>"),
        ),
    }
}

async fn videos() -> Response {
    Json(json!({"Ballet": "https://youtu.be/dQw4w9WgXcQ", "Jazz": ""})).into_response()
}

async fn submit(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.record(Method::POST, "/submit-registration", &headers, Some(body));
    raw_json(stub.config.submit_status, stub.config.submit_body.clone())
}

async fn inquiry(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.record(Method::POST, "/api/inquiries", &headers, Some(body));
    Json(json!({})).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == ADMIN_PASSWORD {
        Json(json!({"token": ADMIN_TOKEN})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Wrong password"})),
        )
            .into_response()
    }
}

async fn admin_courses(State(stub): State<StubBackend>, headers: HeaderMap) -> Response {
    stub.record(Method::GET, "/admin/courses", &headers, None);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"courses": [
        {"id": 1, "name": "Ballet", "price": 3600, "capacity": 20, "used": 20, "remaining": 0},
        {"id": 9, "name": "Ballet 教材費", "price": 500, "capacity": 0, "used": 0, "remaining": 0}
    ]}))
    .into_response()
}

async fn update_course(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.record(Method::PUT, format!("/admin/course/{id}"), &headers, Some(body));
    message_reply(&stub, StatusCode::OK, "Course updated")
}

async fn create_course(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.record(Method::POST, "/admin/course", &headers, Some(body));
    if !authorized(&headers) {
        return unauthorized();
    }
    message_reply(&stub, StatusCode::OK, "Course created")
}

async fn delete_course(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    stub.record(Method::DELETE, format!("/admin/course/{id}"), &headers, None);
    if !authorized(&headers) {
        return unauthorized();
    }
    message_reply(&stub, StatusCode::NO_CONTENT, "Course deleted")
}

async fn delete_registration(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    stub.record(
        Method::DELETE,
        format!("/admin/registration/{id}"),
        &headers,
        None,
    );
    if !authorized(&headers) {
        return unauthorized();
    }
    message_reply(&stub, StatusCode::NO_CONTENT, "Registration deleted")
}

async fn payment(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.record(
        Method::PUT,
        format!("/admin/registration/{id}/payment"),
        &headers,
        Some(body),
    );
    Json(json!({"message": "Payment status updated"})).into_response()
}

async fn save_window(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.record(
        Method::POST,
        "/admin/settings/registration-time",
        &headers,
        Some(body),
    );
    message_reply(&stub, StatusCode::OK, "Saved")
}

async fn registrations(State(stub): State<StubBackend>, headers: HeaderMap) -> Response {
    stub.record(Method::GET, "/admin/registrations", &headers, None);
    Json(json!({
        "registrations": [
            {"id": 1, "student_name": "Amy Chen", "class_name": "Sunflower",
             "course_count": 2, "supply_count": 1, "is_paid": false},
            {"id": 2, "student_name": "Ben Wu", "course_count": 1, "supply_count": 0,
             "is_paid": true}
        ],
        "statistics": {"totalRegistrations": 2, "totalStudents": 2,
                       "totalCourseEnrollments": 3, "totalSupplyOrders": 1}
    }))
    .into_response()
}

async fn registration_detail(Path(id): Path<i64>) -> Response {
    Json(json!({
        "id": id,
        "student_name": "Amy Chen",
        "courses": [{"name": "Ballet", "price": "3600"}, {"name": "Jazz", "price": 3200}],
        "supplies": [{"name": "舞鞋", "price": "250"}]
    }))
    .into_response()
}

fn router(stub: StubBackend) -> Router {
    Router::new()
        .route("/api/courses", get(courses))
        .route("/api/classes", get(classes))
        .route("/api/settings/registration-time", get(window))
        .route("/api/courses/availability", get(availability))
        .route("/api/course-videos", get(videos))
        .route("/submit-registration", post(submit))
        .route("/api/inquiries", post(inquiry))
        .route("/admin/login", post(login))
        .route("/admin/courses", get(admin_courses))
        .route("/admin/course", post(create_course))
        .route("/admin/course/{id}", put(update_course).delete(delete_course))
        .route("/admin/registrations", get(registrations))
        .route(
            "/admin/registration/{id}",
            get(registration_detail).delete(delete_registration),
        )
        .route("/admin/registration/{id}/payment", put(payment))
        .route("/admin/settings/registration-time", post(save_window))
        .with_state(stub)
}

/// A running stub backend and a client pointed at it.
pub struct TestBackend {
    pub stub: StubBackend,
    pub client: ApiClient,
    server: JoinHandle<()>,
}

impl TestBackend {
    pub async fn start(config: StubConfig) -> Self {
        let stub = StubBackend::new(config);
        let app: Router = router(stub.clone());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("bind listener");
        let addr: SocketAddr = listener.local_addr().expect("local addr");

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        let client = ApiClient::new(ClientConfig::with_base_url(format!("http://{addr}")))
            .expect("build client");

        Self {
            stub,
            client,
            server,
        }
    }
}

impl Drop for TestBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Mid-way through the stub's default registration window.
pub fn mid_march() -> OffsetDateTime {
    datetime!(2026-03-10 04:00 UTC)
}
