//! Handlers for the `/visitors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use hms_core::types::DbId;
use hms_db::models::visitor::{CheckOutVisitor, RegisterVisitor};
use hms_db::repositories::VisitorRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /visitors`.
#[derive(Debug, Deserialize)]
pub struct VisitorQuery {
    /// Narrow to visits to one student.
    pub student_id: Option<DbId>,
    /// Narrow to visits checked in on one date.
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/visitors
///
/// List the visitor log, optionally narrowed by student and/or date.
pub async fn list_visitors(
    State(state): State<AppState>,
    Query(params): Query<VisitorQuery>,
) -> AppResult<impl IntoResponse> {
    let visitors = VisitorRepo::list(&state.db, params.student_id, params.date)?;
    Ok(Json(DataResponse { data: visitors }))
}

/// POST /api/v1/visitors
///
/// Register a visitor, checked in as of now unless a check-in time is
/// supplied.
pub async fn register_visitor(
    State(state): State<AppState>,
    Json(input): Json<RegisterVisitor>,
) -> AppResult<impl IntoResponse> {
    let record = VisitorRepo::register(&state.db, &input, chrono::Utc::now())?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// POST /api/v1/visitors/{id}/check-out
///
/// Check a visitor out. A second check-out is a conflict.
pub async fn check_out_visitor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CheckOutVisitor>,
) -> AppResult<impl IntoResponse> {
    let at = input.check_out_time.unwrap_or_else(chrono::Utc::now);
    let record = VisitorRepo::check_out(&state.db, id, at)?;
    Ok(Json(DataResponse { data: record }))
}
