//! Handlers for the `/rooms` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use hms_core::stats;
use hms_db::repositories::RoomRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/rooms
///
/// List all rooms in insertion order.
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rooms = RoomRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: rooms }))
}

/// GET /api/v1/rooms/occupancy
///
/// Occupancy summary over the full room collection.
pub async fn occupancy(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rooms = RoomRepo::list(&state.db)?;
    Ok(Json(DataResponse {
        data: stats::occupancy(&rooms),
    }))
}
