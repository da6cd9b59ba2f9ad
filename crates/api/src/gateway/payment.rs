//! Payment gateway contract and the mock used in this deployment.

use async_trait::async_trait;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;

use hms_core::error::CoreError;
use hms_core::fee::FeeType;
use hms_core::types::{DbId, Timestamp};

/// Checkout/confirmation request passed to the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    pub student_id: DbId,
    pub fee_id: DbId,
    pub fee_type: FeeType,
    /// Amount in whole currency units; the gateway converts to minor units.
    pub amount: i64,
}

/// A checkout session opened with the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    pub id: String,
    pub client_secret: String,
    pub status: String,
    pub payment_status: String,
    /// Amount in minor currency units (paise).
    pub amount_minor: i64,
    pub currency: String,
    pub student_id: DbId,
    pub fee_id: DbId,
    pub created_at: Timestamp,
}

/// A settled (or failed) payment as reported by the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    /// Amount in minor currency units (paise).
    pub amount_minor: i64,
    pub student_id: DbId,
    pub fee_id: DbId,
    pub created_at: Timestamp,
}

/// The payment collaborator.
///
/// The interface is async and split into checkout and confirmation so a
/// real integration can settle asynchronously (pending -> confirmed via
/// callback) even though the mock confirms synchronously.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open a checkout session for a fee.
    async fn create_checkout(&self, req: &PaymentRequest) -> Result<CheckoutSession, CoreError>;

    /// Confirm payment of a fee, returning the settled intent.
    async fn confirm_payment(&self, req: &PaymentRequest) -> Result<PaymentIntent, CoreError>;
}

/// Mock gateway: logs the call and fabricates identifiers.
pub struct MockPaymentGateway;

/// Random lowercase alphanumeric token of the kind the real gateway uses
/// in its identifiers.
fn token(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_checkout(&self, req: &PaymentRequest) -> Result<CheckoutSession, CoreError> {
        let session = CheckoutSession {
            id: format!("cs_{}", token(9)),
            client_secret: format!("{}_secret_{}", token(9), token(9)),
            status: "open".to_string(),
            payment_status: "unpaid".to_string(),
            amount_minor: req.amount * 100,
            currency: "inr".to_string(),
            student_id: req.student_id,
            fee_id: req.fee_id,
            created_at: chrono::Utc::now(),
        };
        tracing::info!(
            session_id = %session.id,
            student_id = req.student_id,
            fee_id = req.fee_id,
            amount = req.amount,
            "Checkout session created"
        );
        Ok(session)
    }

    async fn confirm_payment(&self, req: &PaymentRequest) -> Result<PaymentIntent, CoreError> {
        let intent = PaymentIntent {
            id: format!("pi_{}", token(9)),
            status: "succeeded".to_string(),
            amount_minor: req.amount * 100,
            student_id: req.student_id,
            fee_id: req.fee_id,
            created_at: chrono::Utc::now(),
        };
        tracing::info!(
            transaction_id = %intent.id,
            student_id = req.student_id,
            fee_id = req.fee_id,
            amount = req.amount,
            "Payment processed"
        );
        Ok(intent)
    }
}
