//! Route definitions for the `/visitors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::visitors;
use crate::state::AppState;

/// Routes mounted at `/visitors`.
///
/// ```text
/// GET    /                 -> list_visitors
/// POST   /                 -> register_visitor
/// POST   /{id}/check-out   -> check_out_visitor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(visitors::list_visitors).post(visitors::register_visitor),
        )
        .route("/{id}/check-out", post(visitors::check_out_visitor))
}
