//! Handlers for the `/fees` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use hms_core::types::DbId;
use hms_db::repositories::FeeRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /fees`.
#[derive(Debug, Deserialize)]
pub struct FeeQuery {
    /// Narrow to one student's fees.
    pub student_id: Option<DbId>,
}

/// GET /api/v1/fees
///
/// List fees, optionally narrowed to one student. Statuses are reported
/// as of today: a pending fee past its due date reads as overdue.
pub async fn list_fees(
    State(state): State<AppState>,
    Query(params): Query<FeeQuery>,
) -> AppResult<impl IntoResponse> {
    let fees = match params.student_id {
        Some(student_id) => FeeRepo::list_for_student(&state.db, student_id)?,
        None => FeeRepo::list(&state.db)?,
    };

    let today = chrono::Utc::now().date_naive();
    let fees: Vec<_> = fees
        .into_iter()
        .map(|mut fee| {
            fee.status = fee.effective_status(today);
            fee
        })
        .collect();

    Ok(Json(DataResponse { data: fees }))
}
