//! Handlers for the `/attendance` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use hms_core::stats;
use hms_core::types::DbId;
use hms_db::models::attendance::RecordAttendance;
use hms_db::repositories::AttendanceRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /attendance`.
#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    /// Narrow to one student's marks.
    pub student_id: Option<DbId>,
}

/// Query params for `GET /attendance/summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub year: i32,
    pub month: u32,
}

/// GET /api/v1/attendance
///
/// List attendance marks, optionally narrowed to one student.
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(params): Query<AttendanceQuery>,
) -> AppResult<impl IntoResponse> {
    let records = match params.student_id {
        Some(student_id) => AttendanceRepo::list_for_student(&state.db, student_id)?,
        None => AttendanceRepo::list(&state.db)?,
    };
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/attendance/summary
///
/// Count marks by status within one calendar month.
pub async fn month_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryQuery>,
) -> AppResult<impl IntoResponse> {
    let records = AttendanceRepo::list(&state.db)?;
    let summary = stats::attendance_summary(&records, params.year, params.month);
    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/attendance
///
/// Record one student's mark for one day. A repeat call for the same
/// student and date overwrites the stored mark.
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(input): Json<RecordAttendance>,
) -> AppResult<impl IntoResponse> {
    let record = AttendanceRepo::record(&state.db, &input, chrono::Utc::now())?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
