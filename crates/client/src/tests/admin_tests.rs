// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use afterclass_domain::{CourseDraft, CourseDraftInput, DomainError, StatusTone, visible_courses};
use axum::http::Method;
use serde_json::json;
use time::macros::datetime;

use super::helpers::{ADMIN_PASSWORD, ADMIN_TOKEN, StubConfig, TestBackend, mid_march};
use crate::{ClientError, ValidationError};

#[tokio::test]
async fn test_admin_requests_need_a_token() {
    let backend = TestBackend::start(StubConfig::default()).await;

    let err = backend.client.admin_courses().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Failed to load courses"), "Please log in");
}

#[tokio::test]
async fn test_login_keeps_token_for_later_requests() {
    let mut backend = TestBackend::start(StubConfig::default()).await;

    let token = backend.client.login(ADMIN_PASSWORD).await.unwrap();
    assert_eq!(token, ADMIN_TOKEN);
    assert_eq!(backend.client.token(), Some(ADMIN_TOKEN));

    let courses = backend.client.admin_courses().await.unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(visible_courses(&courses).len(), 1);

    let recorded = backend.stub.requests_to("/admin/courses");
    assert_eq!(
        recorded[0].authorization.as_deref(),
        Some("Bearer token-123")
    );

    backend.client.logout();
    assert!(backend.client.token().is_none());
    assert!(
        backend
            .client
            .admin_courses()
            .await
            .unwrap_err()
            .is_unauthorized()
    );
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let mut backend = TestBackend::start(StubConfig::default()).await;

    let err = backend.client.login("guess").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login failed"), "Wrong password");
    assert!(backend.client.token().is_none());
}

#[tokio::test]
async fn test_toggle_payment_sends_negation() {
    let backend = TestBackend::start(StubConfig::default()).await;

    let message = backend.client.toggle_payment(7, false).await.unwrap();
    assert_eq!(message.as_deref(), Some("Payment status updated"));
    backend.client.toggle_payment(8, true).await.unwrap();

    let first = backend.stub.requests_to("/admin/registration/7/payment");
    assert_eq!(first[0].body, Some(json!({"paid": true})));
    let second = backend.stub.requests_to("/admin/registration/8/payment");
    assert_eq!(second[0].body, Some(json!({"paid": false})));
}

#[tokio::test]
async fn test_capacity_is_validated_before_sending() {
    let backend = TestBackend::start(StubConfig::default()).await;

    let err = backend.client.update_capacity(3, "-1").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::Input(DomainError::InvalidCapacity(_)))
    ));
    assert!(backend.stub.requests_to("/admin/course/3").is_empty());

    backend.client.update_capacity(3, "25").await.unwrap();
    let sent = backend.stub.requests_to("/admin/course/3");
    assert_eq!(sent[0].body, Some(json!({"capacity": 25})));
}

#[tokio::test]
async fn test_window_save_validates_then_reports_status() {
    let backend = TestBackend::start(StubConfig::default()).await;

    let err = backend
        .client
        .save_registration_window("2026-03-31T18:00", "2026-03-01T09:00", mid_march())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::Input(DomainError::InvalidWindowRange { .. }))
    ));
    assert!(
        backend
            .stub
            .requests_to("/admin/settings/registration-time")
            .is_empty()
    );

    let status = backend
        .client
        .save_registration_window("2026-03-01T09:00", "2026-03-31T18:00", mid_march())
        .await
        .unwrap();
    assert_eq!(status.tone, StatusTone::Success);
    assert_eq!(status.label, "Registration open");

    let sent = backend.stub.requests_to("/admin/settings/registration-time");
    assert_eq!(
        sent[0].body,
        Some(json!({"start": "2026-03-01T09:00", "end": "2026-03-31T18:00"}))
    );
}

#[tokio::test]
async fn test_registrations_and_detail() {
    let backend = TestBackend::start(StubConfig::default()).await;

    let response = backend.client.registrations().await.unwrap();
    assert_eq!(response.registrations.len(), 2);
    assert_eq!(response.statistics.total_course_enrollments, 3);
    assert_eq!(response.registrations[1].class_name, None);

    let detail = backend.client.registration_detail(1).await.unwrap();
    assert_eq!(detail.courses.len(), 2);
    assert_eq!(detail.total_cost(), 3600 + 3200 + 250);
}

fn ballet_draft() -> CourseDraft {
    CourseDraft::parse(&CourseDraftInput {
        name: " Ballet ",
        price: "3600",
        sessions: "12",
        frequency: "weekly",
        capacity: "",
        description: "Classical basics",
        video_url: "https://youtu.be/dQw4w9WgXcQ",
    })
    .unwrap()
}

async fn logged_in(config: StubConfig) -> TestBackend {
    let mut backend = TestBackend::start(config).await;
    backend.client.login(ADMIN_PASSWORD).await.unwrap();
    backend
}

#[tokio::test]
async fn test_create_course_posts_full_draft() {
    let backend = logged_in(StubConfig::default()).await;

    let message = backend.client.create_course(&ballet_draft()).await.unwrap();
    assert_eq!(message.as_deref(), Some("Course created"));

    let sent = backend.stub.requests_to("/admin/course");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::POST);
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer token-123"));
    assert_eq!(
        sent[0].body,
        Some(json!({
            "name": "Ballet",
            "price": 3600,
            "sessions": 12,
            "frequency": "weekly",
            "capacity": 30,
            "description": "Classical basics",
            "video_url": "https://youtu.be/dQw4w9WgXcQ"
        }))
    );
}

#[tokio::test]
async fn test_update_course_puts_full_draft() {
    let backend = logged_in(StubConfig::default()).await;

    let message = backend.client.update_course(4, &ballet_draft()).await.unwrap();
    assert_eq!(message.as_deref(), Some("Course updated"));

    let sent = backend.stub.requests_to("/admin/course/4");
    assert_eq!(sent[0].method, Method::PUT);
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer token-123"));
    let body = sent[0].body.clone().unwrap();
    assert_eq!(body["name"], "Ballet");
    assert_eq!(body["capacity"], 30);
}

#[tokio::test]
async fn test_delete_course_and_registration() {
    let backend = logged_in(StubConfig::default()).await;

    let message = backend.client.delete_course(5).await.unwrap();
    assert_eq!(message.as_deref(), Some("Course deleted"));
    let message = backend.client.delete_registration(7).await.unwrap();
    assert_eq!(message.as_deref(), Some("Registration deleted"));

    let course = backend.stub.requests_to("/admin/course/5");
    assert_eq!(course[0].method, Method::DELETE);
    assert_eq!(course[0].authorization.as_deref(), Some("Bearer token-123"));
    assert_eq!(course[0].body, None);

    let registration = backend.stub.requests_to("/admin/registration/7");
    assert_eq!(registration[0].method, Method::DELETE);
    assert_eq!(
        registration[0].authorization.as_deref(),
        Some("Bearer token-123")
    );
}

#[tokio::test]
async fn test_deletes_need_a_token() {
    let backend = TestBackend::start(StubConfig::default()).await;

    assert!(backend.client.delete_course(5).await.unwrap_err().is_unauthorized());
    assert!(
        backend
            .client
            .delete_registration(7)
            .await
            .unwrap_err()
            .is_unauthorized()
    );
}

#[tokio::test]
async fn test_empty_success_replies_are_not_errors() {
    let backend = logged_in(StubConfig {
        empty_admin_replies: true,
        ..StubConfig::default()
    })
    .await;

    // 204 No Content
    assert_eq!(backend.client.delete_registration(7).await.unwrap(), None);
    assert_eq!(backend.client.delete_course(5).await.unwrap(), None);

    // 200 with an empty body
    let status = backend
        .client
        .save_registration_window("2026-03-01T09:00", "2026-03-31T18:00", mid_march())
        .await
        .unwrap();
    assert_eq!(status.label, "Registration open");
    assert_eq!(backend.client.update_capacity(3, "25").await.unwrap(), None);
    assert_eq!(backend.client.create_course(&ballet_draft()).await.unwrap(), None);
}

#[tokio::test]
async fn test_registration_window_is_parsed_in_display_timezone() {
    let backend = TestBackend::start(StubConfig {
        window: json!({"start": "2026-03-01T09:00", "end": "2026-03-31T18:00:00Z"}),
        ..StubConfig::default()
    })
    .await;

    let window = backend.client.registration_window().await.unwrap();
    // Asia/Taipei is UTC+8
    assert_eq!(window.start, Some(datetime!(2026-03-01 01:00 UTC)));
    assert_eq!(window.end, Some(datetime!(2026-03-31 18:00 UTC)));
    assert_eq!(
        window.evaluate(mid_march()).admin_status().label,
        "Registration open"
    );
}

#[tokio::test]
async fn test_missing_registration_window_is_not_configured() {
    let backend = TestBackend::start(StubConfig {
        window: json!({}),
        ..StubConfig::default()
    })
    .await;

    let window = backend.client.registration_window().await.unwrap();
    assert_eq!(window.start, None);
    let status = window.evaluate(mid_march()).admin_status();
    assert_eq!(status.tone, StatusTone::Warning);
}
