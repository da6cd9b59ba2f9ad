//! Route registration for the `/api/v1` tree.

pub mod attendance;
pub mod automations;
pub mod dashboard;
pub mod health;
pub mod notices;
pub mod notifications;
pub mod payments;
pub mod reports;
pub mod residency;
pub mod visitors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /students                      list
/// /rooms                         list; /rooms/occupancy summary
/// /allocations                   list, create
/// /fees                          list (optionally by student)
/// /complaints                    list, create; /{id}/status update
/// /notices                       list, create
/// /announcements                 list, create
/// /visitors                      list, register; /{id}/check-out
/// /attendance                    list, record; /summary by month
/// /automations                   list, create; /{id}/toggle; delete
/// /payments                      /checkout, /initiate
/// /notifications                 /email, /sms
/// /reports                       /export
/// /dashboard                     /admin, /warden, /student/{id}
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(residency::router())
        .nest("/visitors", visitors::router())
        .nest("/attendance", attendance::router())
        .nest("/automations", automations::router())
        .nest("/payments", payments::router())
        .nest("/notifications", notifications::router())
        .nest("/reports", reports::router())
        .nest("/dashboard", dashboard::router())
        .merge(notices::router())
}
