//! Route definitions for the residency resources: students, rooms,
//! allocations, fees, and complaints.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{allocations, complaints, fees, rooms, students, users};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /users                   -> list_users
/// GET    /students                -> list_students
/// GET    /rooms                   -> list_rooms
/// GET    /rooms/occupancy         -> occupancy
/// GET    /allocations             -> list_allocations
/// POST   /allocations             -> create_allocation
/// GET    /fees                    -> list_fees
/// GET    /complaints              -> list_complaints
/// POST   /complaints              -> create_complaint
/// PUT    /complaints/{id}/status  -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/students", get(students::list_students))
        .route("/rooms", get(rooms::list_rooms))
        .route("/rooms/occupancy", get(rooms::occupancy))
        .route(
            "/allocations",
            get(allocations::list_allocations).post(allocations::create_allocation),
        )
        .route("/fees", get(fees::list_fees))
        .route(
            "/complaints",
            get(complaints::list_complaints).post(complaints::create_complaint),
        )
        .route("/complaints/{id}/status", put(complaints::update_status))
}
