//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use hms_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
///
/// List all user accounts in insertion order.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: users }))
}
