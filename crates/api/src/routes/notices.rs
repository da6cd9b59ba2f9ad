//! Route definitions for the `/notices` and `/announcements` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::notices;
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /notices         -> list_notices
/// POST   /notices         -> create_notice
/// GET    /announcements   -> list_announcements
/// POST   /announcements   -> create_announcement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/notices",
            get(notices::list_notices).post(notices::create_notice),
        )
        .route(
            "/announcements",
            get(notices::list_announcements).post(notices::create_announcement),
        )
}
