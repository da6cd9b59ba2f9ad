//! Route definitions for the `/attendance` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET    /           -> list_attendance
/// POST   /           -> record_attendance
/// GET    /summary    -> month_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(attendance::list_attendance).post(attendance::record_attendance),
        )
        .route("/summary", get(attendance::month_summary))
}
