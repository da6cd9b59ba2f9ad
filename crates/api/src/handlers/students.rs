//! Handlers for the `/students` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use hms_db::repositories::StudentRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/students
///
/// List all students in insertion order.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: students }))
}
