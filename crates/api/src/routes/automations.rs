//! Route definitions for the `/automations` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::automations;
use crate::state::AppState;

/// Routes mounted at `/automations`.
///
/// ```text
/// GET    /              -> list_automations
/// POST   /              -> create_automation
/// POST   /{id}/toggle   -> toggle_automation
/// DELETE /{id}          -> delete_automation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(automations::list_automations).post(automations::create_automation),
        )
        .route("/{id}/toggle", post(automations::toggle_automation))
        .route("/{id}", delete(automations::delete_automation))
}
