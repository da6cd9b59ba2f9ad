//! Route definitions for the `/dashboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /admin          -> admin_dashboard
/// GET    /warden         -> warden_dashboard
/// GET    /student/{id}   -> student_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard::admin_dashboard))
        .route("/warden", get(dashboard::warden_dashboard))
        .route("/student/{id}", get(dashboard::student_dashboard))
}
