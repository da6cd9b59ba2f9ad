//! HTTP-level integration tests for the `/complaints` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn test_create_complaint_resolves_room_labels() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/complaints",
        json!({
            "student_id": 2,
            "category": "CLEANLINESS",
            "description": "Corridor not cleaned this week",
            "priority": "LOW"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["status"], "OPEN");
    assert_eq!(data["student_name"], "Priya Gupta");
    assert_eq!(data["room_number"], "A-102");
    assert!(data["resolved_at"].is_null());
}

#[tokio::test]
async fn test_resolving_stamps_resolution_time() {
    let app = build_test_app();
    // Seeded complaint 2 is open.
    let response = put_json(
        &app,
        "/api/v1/complaints/2/status",
        json!({ "status": "RESOLVED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "RESOLVED");
    assert!(!json["data"]["resolved_at"].is_null());
}

#[tokio::test]
async fn test_reopening_is_a_conflict() {
    let app = build_test_app();
    // Seeded complaint 3 is already resolved.
    let response = put_json(
        &app,
        "/api/v1/complaints/3/status",
        json!({ "status": "OPEN" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Stored record unchanged.
    let list = body_json(get(&app, "/api/v1/complaints?student_id=3").await).await;
    assert_eq!(list["data"][0]["status"], "RESOLVED");
}

#[tokio::test]
async fn test_update_unknown_complaint_404() {
    let app = build_test_app();
    let response = put_json(
        &app,
        "/api/v1/complaints/999/status",
        json!({ "status": "CLOSED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_scoped_to_student() {
    let app = build_test_app();
    let json = body_json(get(&app, "/api/v1/complaints?student_id=1").await).await;
    let data = json["data"].as_array().expect("array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["category"], "WATER");
}
