//! Route definitions for the `/payments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// POST   /checkout   -> create_checkout
/// POST   /initiate   -> initiate_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(payments::create_checkout))
        .route("/initiate", post(payments::initiate_payment))
}
