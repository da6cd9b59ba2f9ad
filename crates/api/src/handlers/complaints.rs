//! Handlers for the `/complaints` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use hms_core::types::DbId;
use hms_db::models::complaint::{NewComplaint, UpdateComplaintStatus};
use hms_db::repositories::ComplaintRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /complaints`.
#[derive(Debug, Deserialize)]
pub struct ComplaintQuery {
    /// Narrow to one student's complaints.
    pub student_id: Option<DbId>,
}

/// GET /api/v1/complaints
///
/// List complaints, optionally narrowed to one student.
pub async fn list_complaints(
    State(state): State<AppState>,
    Query(params): Query<ComplaintQuery>,
) -> AppResult<impl IntoResponse> {
    let complaints = match params.student_id {
        Some(student_id) => ComplaintRepo::list_for_student(&state.db, student_id)?,
        None => ComplaintRepo::list(&state.db)?,
    };
    Ok(Json(DataResponse { data: complaints }))
}

/// POST /api/v1/complaints
///
/// Raise a complaint against the student's current room.
pub async fn create_complaint(
    State(state): State<AppState>,
    Json(input): Json<NewComplaint>,
) -> AppResult<impl IntoResponse> {
    let complaint = ComplaintRepo::create(&state.db, &input, chrono::Utc::now())?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: complaint })))
}

/// PUT /api/v1/complaints/{id}/status
///
/// Move a complaint through its workflow. Transitions are forward-only;
/// moving into resolved or closed stamps the resolution time.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaintStatus>,
) -> AppResult<impl IntoResponse> {
    let complaint = ComplaintRepo::update_status(&state.db, id, input.status, chrono::Utc::now())?;
    Ok(Json(DataResponse { data: complaint }))
}
