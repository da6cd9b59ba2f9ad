//! Route definitions for the `/notifications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST   /email   -> send_email
/// POST   /sms     -> send_sms
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/email", post(notifications::send_email))
        .route("/sms", post(notifications::send_sms))
}
