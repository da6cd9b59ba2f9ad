//! HTTP-level integration tests for the `/fees` and `/payments` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/fees lists the collection with read-time statuses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_fees() {
    let app = build_test_app();
    let response = get(&app, "/api/v1/fees").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("array");
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["status"], "PAID");
    assert_eq!(data[2]["status"], "OVERDUE");
}

#[tokio::test]
async fn test_list_fees_for_student() {
    let app = build_test_app();
    let response = get(&app, "/api/v1/fees?student_id=2").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().expect("array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["student_name"], "Priya Gupta");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/payments/initiate pays a fee end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_initiate_payment_marks_fee_paid() {
    let app = build_test_app();

    let before = body_json(get(&app, "/api/v1/dashboard/admin").await).await;
    let paid_before = before["data"]["fees"]["paid"].as_i64().unwrap();

    let response = post_json(
        &app,
        "/api/v1/payments/initiate",
        json!({ "student_id": 1, "fee_id": 2, "amount": 2000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["transaction_id"]
        .as_str()
        .expect("transaction id")
        .starts_with("pi_"));
    assert_eq!(data["fee"]["status"], "PAID");
    assert!(!data["fee"]["payment_date"].is_null());

    // The paid aggregate rises by exactly the fee amount.
    let after = body_json(get(&app, "/api/v1/dashboard/admin").await).await;
    let paid_after = after["data"]["fees"]["paid"].as_i64().unwrap();
    assert_eq!(paid_after, paid_before + 2000);
}

#[tokio::test]
async fn test_paying_twice_conflicts() {
    let app = build_test_app();
    let body = json!({ "student_id": 1, "fee_id": 2, "amount": 2000 });

    let first = post_json(&app, "/api/v1/payments/initiate", body.clone()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json(&app, "/api/v1/payments/initiate", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_paying_already_paid_seed_fee_conflicts() {
    let app = build_test_app();
    // Fee 1 is seeded as paid.
    let response = post_json(
        &app,
        "/api/v1/payments/initiate",
        json!({ "student_id": 1, "fee_id": 1, "amount": 15000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_fee_404() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/payments/initiate",
        json!({ "student_id": 1, "fee_id": 999, "amount": 2000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_amount_mismatch_rejected() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/payments/initiate",
        json!({ "student_id": 1, "fee_id": 2, "amount": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Fee untouched by the rejected call.
    let fees = body_json(get(&app, "/api/v1/fees?student_id=1").await).await;
    let fee2 = &fees["data"].as_array().unwrap()[1];
    assert!(fee2["payment_date"].is_null());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/payments/checkout opens a session without paying
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_checkout_session_changes_no_state() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/payments/checkout",
        json!({ "student_id": 1, "fee_id": 2, "amount": 2000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].as_str().expect("session id").starts_with("cs_"));
    assert_eq!(data["payment_status"], "unpaid");
    assert_eq!(data["amount_minor"], 200_000);
    assert_eq!(data["currency"], "inr");

    // The fee itself is still unpaid.
    let fees = body_json(get(&app, "/api/v1/fees?student_id=1").await).await;
    let fee2 = &fees["data"].as_array().unwrap()[1];
    assert!(fee2["payment_date"].is_null());
}
