//! Notification dispatch contract and the logging mock.
//!
//! Dispatch is fire-and-forget from the action layer's perspective: a
//! delivery failure is logged and surfaced where the caller asked for it,
//! but never rolls back the local state change that triggered the send.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use hms_core::error::CoreError;

/// An outbound email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Free-form category label, e.g. "fee_reminder".
    pub category: String,
}

/// An outbound SMS.
#[derive(Debug, Clone)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
    pub category: String,
}

/// Acknowledgement from the dispatcher.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReceipt {
    pub accepted: bool,
    pub message_id: Uuid,
}

/// The email/SMS collaborator.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn send_email(&self, msg: &EmailMessage) -> Result<DispatchReceipt, CoreError>;
    async fn send_sms(&self, msg: &SmsMessage) -> Result<DispatchReceipt, CoreError>;
}

/// Mock dispatcher: logs the message and fabricates a message id.
pub struct LoggingDispatcher;

#[async_trait]
impl NotificationDispatcher for LoggingDispatcher {
    async fn send_email(&self, msg: &EmailMessage) -> Result<DispatchReceipt, CoreError> {
        let receipt = DispatchReceipt {
            accepted: true,
            message_id: Uuid::new_v4(),
        };
        tracing::info!(
            to = %msg.to,
            subject = %msg.subject,
            category = %msg.category,
            message_id = %receipt.message_id,
            "Email dispatched"
        );
        Ok(receipt)
    }

    async fn send_sms(&self, msg: &SmsMessage) -> Result<DispatchReceipt, CoreError> {
        let receipt = DispatchReceipt {
            accepted: true,
            message_id: Uuid::new_v4(),
        };
        tracing::info!(
            to = %msg.to,
            category = %msg.category,
            message_id = %receipt.message_id,
            "SMS dispatched"
        );
        Ok(receipt)
    }
}
