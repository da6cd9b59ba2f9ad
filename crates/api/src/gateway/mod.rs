//! External collaborator interfaces and their mock implementations.
//!
//! The payment gateway and notification dispatcher are network services
//! in a real deployment; here they are traits with logging mocks that
//! fabricate identifiers. Calls are fail-fast: each one runs under the
//! configured timeout and a failure surfaces immediately to the caller
//! with no retry.

pub mod notify;
pub mod payment;

use std::future::Future;
use std::time::Duration;

use hms_core::error::CoreError;

/// Run a collaborator call under `timeout_secs`, mapping elapse to
/// [`CoreError::ExternalService`].
pub async fn call_with_timeout<T>(
    timeout_secs: u64,
    fut: impl Future<Output = Result<T, CoreError>>,
) -> Result<T, CoreError> {
    tokio::time::timeout(Duration::from_secs(timeout_secs), fut)
        .await
        .map_err(|_| {
            CoreError::ExternalService(format!("Call timed out after {timeout_secs}s"))
        })?
}
