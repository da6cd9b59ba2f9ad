use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gateway::notify::NotificationDispatcher;
use crate::gateway::payment::PaymentGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub db: Arc<hms_db::MemDb>,
    /// Server configuration (timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Payment gateway collaborator.
    pub payments: Arc<dyn PaymentGateway>,
    /// Email/SMS dispatch collaborator.
    pub notifier: Arc<dyn NotificationDispatcher>,
}
