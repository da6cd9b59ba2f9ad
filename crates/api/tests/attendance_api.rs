//! HTTP-level integration tests for the `/attendance` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;

#[tokio::test]
async fn test_record_attendance() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/attendance",
        json!({ "student_id": 1, "date": "2024-11-04", "status": "present" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "present");
    assert!(json["data"]["leave_type"].is_null());
}

#[tokio::test]
async fn test_recording_same_day_overwrites() {
    let app = build_test_app();
    let first = body_json(
        post_json(
            &app,
            "/api/v1/attendance",
            json!({ "student_id": 1, "date": "2024-11-04", "status": "present" }),
        )
        .await,
    )
    .await;

    let second = body_json(
        post_json(
            &app,
            "/api/v1/attendance",
            json!({
                "student_id": 1,
                "date": "2024-11-04",
                "status": "on_leave",
                "leave_type": "sick"
            }),
        )
        .await,
    )
    .await;

    // Overwrite, not duplicate: same id, new status, one record for the key.
    assert_eq!(second["data"]["id"], first["data"]["id"]);
    assert_eq!(second["data"]["status"], "on_leave");

    let list = body_json(get(&app, "/api/v1/attendance?student_id=1").await).await;
    assert_eq!(list["data"].as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_on_leave_requires_leave_type() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/attendance",
        json!({ "student_id": 1, "date": "2024-11-04", "status": "on_leave" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_month_summary_counts_by_status() {
    let app = build_test_app();
    for (student_id, date, status, leave) in [
        (1, "2024-11-01", "present", None),
        (2, "2024-11-01", "absent", None),
        (3, "2024-11-01", "on_leave", Some("casual")),
        (1, "2024-12-01", "present", None),
    ] {
        let mut body = json!({ "student_id": student_id, "date": date, "status": status });
        if let Some(leave) = leave {
            body["leave_type"] = json!(leave);
        }
        let response = post_json(&app, "/api/v1/attendance", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(&app, "/api/v1/attendance/summary?year=2024&month=11").await).await;
    assert_eq!(json["data"]["present"], 1);
    assert_eq!(json["data"]["absent"], 1);
    assert_eq!(json["data"]["on_leave"], 1);
}
