mod common;

use axum::http::{Method, StatusCode};
use common::{send, test_app, unavailable_app};
use serde_json::{json, Value};

async fn create(app: &axum::Router, title: &str, date: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/event-calendar/create",
        Some(json!({ "title": title, "eventDate": date, "eventType": "meeting" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn create_returns_created_entity() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/event-calendar/create",
        Some(json!({
            "title": "Retro",
            "description": "Sprint retro",
            "eventDate": "2024-03-15T09:30:00Z",
            "eventType": "meeting"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Retro");
    assert_eq!(body["description"], "Sprint retro");
    assert_eq!(body["eventType"], "meeting");
    assert_eq!(body["marked"], false);
    assert_eq!(body["event"], "Retro");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn create_without_required_fields_is_bad_request() {
    let app = test_app();
    for payload in [
        json!({ "eventDate": "2024-03-01", "eventType": "meeting" }),
        json!({ "title": "x", "eventType": "meeting" }),
        json!({ "title": "x", "eventDate": "2024-03-01" }),
    ] {
        let (status, body) = send(&app, Method::POST, "/api/v1/event-calendar/create", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "title, eventDate, and eventType are required");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request_with_error_body() {
    let app = test_app();
    let req = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/v1/event-calendar/create")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let res = tower::ServiceExt::oneshot(app, req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn duplicate_title_and_date_conflicts() {
    let app = test_app();
    create(&app, "Launch", "2024-03-10").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/event-calendar/create",
        Some(json!({ "title": "Launch", "eventDate": "2024-03-10", "eventType": "release" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Event with this title already exists on the same date");

    create(&app, "Launch", "2024-03-11").await;
}

#[tokio::test]
async fn list_by_month_returns_only_that_month_in_date_order() {
    let app = test_app();
    create(&app, "late", "2024-03-31T23:59:59Z").await;
    create(&app, "early", "2024-03-01").await;
    create(&app, "feb", "2024-02-29T23:59:59Z").await;
    create(&app, "april", "2024-04-01").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/event-calendar/by-month?year=2024&month=3", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["early", "late"]);
}

#[tokio::test]
async fn list_by_month_requires_year_and_month() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/v1/event-calendar/by-month?year=2024", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "year and month query parameters are required");

    let (status, _) = send(&app, Method::GET, "/api/v1/event-calendar/by-month?year=2024&month=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_empty_body_is_bad_request() {
    let app = test_app();
    let created = create(&app, "Planning", "2024-03-05").await;
    let uri = format!("/api/v1/event-calendar/update/{}", created["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No fields provided to update");
}

#[tokio::test]
async fn update_unknown_event_is_not_found() {
    let app = test_app();
    let uri = format!("/api/v1/event-calendar/update/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "marked": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let app = test_app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/v1/event-calendar/create",
        Some(json!({
            "title": "Demo",
            "description": "keep me",
            "eventDate": "2024-03-20",
            "eventType": "demo"
        })),
    )
    .await;
    let uri = format!("/api/v1/event-calendar/update/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(&app, Method::PATCH, &uri, Some(json!({ "marked": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["marked"], true);
    assert_eq!(updated["title"], "Demo");
    assert_eq!(updated["description"], "keep me");
    assert_eq!(updated["eventDate"], created["eventDate"]);
    assert_eq!(updated["eventType"], "demo");

    let (status, cleared) = send(&app, Method::POST, &uri, Some(json!({ "description": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["description"], Value::Null);
    assert_eq!(cleared["marked"], true);
}

#[tokio::test]
async fn update_with_invalid_id_is_bad_request() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/v1/event-calendar/update/not-a-uuid",
        Some(json!({ "marked": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid eventId");
}

#[tokio::test]
async fn delete_unknown_event_is_not_found() {
    let app = test_app();
    let uri = format!("/api/v1/event-calendar/delete/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn delete_existing_event_then_it_is_gone() {
    let app = test_app();
    let created = create(&app, "Offsite", "2024-03-22").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/event-calendar/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/event-calendar/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/event-calendar/update/{id}"),
        Some(json!({ "marked": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, Method::GET, "/api/v1/event-calendar/by-month?year=2024&month=3", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn list_by_month_with_unrepresentable_year_is_bad_request() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/event-calendar/by-month?year=2147483647&month=12",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "year out of range");
}

#[tokio::test]
async fn update_into_existing_title_and_date_conflicts() {
    let app = test_app();
    create(&app, "Kickoff", "2024-03-04").await;
    let other = create(&app, "Review", "2024-03-04").await;
    let uri = format!("/api/v1/event-calendar/update/{}", other["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "title": "Kickoff" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Event with this title already exists on the same date");

    let (_, listed) = send(&app, Method::GET, "/api/v1/event-calendar/by-month?year=2024&month=3", None).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Review"));
}

#[tokio::test]
async fn insert_losing_unique_race_conflicts() {
    let app = unavailable_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/event-calendar/create",
        Some(json!({ "title": "Race", "eventDate": "2024-03-01", "eventType": "meeting" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Event already exists");
}

#[tokio::test]
async fn store_failure_is_generic_internal_error() {
    let app = unavailable_app();
    let (status, body) = send(&app, Method::GET, "/api/v1/event-calendar/by-month?year=2024&month=3", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch events" }));
}

#[tokio::test]
async fn ready_reports_unavailable_store() {
    let app = unavailable_app();
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"], "unavailable");
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported_media_type() {
    let app = test_app();
    let req = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/v1/event-calendar/create")
        .body(axum::body::Body::from(r#"{"title":"x"}"#))
        .unwrap();
    let res = tower::ServiceExt::oneshot(app, req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().is_some());
}
