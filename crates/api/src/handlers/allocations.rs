//! Handlers for the `/allocations` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hms_db::models::allocation::NewAllocation;
use hms_db::repositories::AllocationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/allocations
///
/// List all room allocations in insertion order.
pub async fn list_allocations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let allocations = AllocationRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: allocations }))
}

/// POST /api/v1/allocations
///
/// Allocate a room to a student. Fails when the room is full, under
/// maintenance, or the student already holds an active allocation.
pub async fn create_allocation(
    State(state): State<AppState>,
    Json(input): Json<NewAllocation>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let allocation = AllocationRepo::allocate(&state.db, &input, today)?;

    tracing::info!(
        allocation_id = allocation.id,
        student_id = allocation.student_id,
        room = %allocation.room_number,
        "Room allocated"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: allocation })))
}
