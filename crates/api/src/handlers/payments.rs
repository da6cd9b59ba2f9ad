//! Handlers for the `/payments` resource.
//!
//! The gateway is an external collaborator; its calls run under the
//! configured timeout and a failure surfaces to the caller immediately.
//! Local state already written before a failed follow-up (e.g. the
//! confirmation email) is never rolled back.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use hms_core::fee::Fee;
use hms_core::types::DbId;
use hms_db::repositories::{FeeRepo, StudentRepo};

use crate::error::AppResult;
use crate::gateway;
use crate::gateway::notify::EmailMessage;
use crate::gateway::payment::PaymentRequest;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /payments/checkout` and `POST /payments/initiate`.
#[derive(Debug, Deserialize)]
pub struct PaymentBody {
    pub student_id: DbId,
    pub fee_id: DbId,
    /// Amount in whole currency units; must match the fee.
    pub amount: i64,
}

/// Response payload for a completed payment.
#[derive(Debug, Serialize)]
pub struct PaymentOutcome {
    pub transaction_id: String,
    pub fee: Fee,
}

/// Resolve and cross-check the fee a payment body refers to.
fn resolve_fee(state: &AppState, body: &PaymentBody) -> AppResult<Fee> {
    let fee = FeeRepo::find(&state.db, body.fee_id)?;
    if fee.student_id != body.student_id {
        return Err(hms_core::error::CoreError::Validation(format!(
            "Fee {} is not charged to student {}",
            fee.id, body.student_id
        ))
        .into());
    }
    if fee.amount != body.amount {
        return Err(hms_core::error::CoreError::Validation(format!(
            "Amount {} does not match fee amount {}",
            body.amount, fee.amount
        ))
        .into());
    }
    Ok(fee)
}

/// POST /api/v1/payments/checkout
///
/// Open a checkout session with the gateway. No local state changes; the
/// fee is only marked paid on confirmation.
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(body): Json<PaymentBody>,
) -> AppResult<impl IntoResponse> {
    let fee = resolve_fee(&state, &body)?;

    let req = PaymentRequest {
        student_id: body.student_id,
        fee_id: fee.id,
        fee_type: fee.fee_type,
        amount: fee.amount,
    };
    let session = gateway::call_with_timeout(
        state.config.external_call_timeout_secs,
        state.payments.create_checkout(&req),
    )
    .await?;

    Ok(Json(DataResponse { data: session }))
}

/// POST /api/v1/payments/initiate
///
/// Pay a fee: confirm with the gateway, mark the fee paid, and return the
/// transaction id. Paying an already-paid (or waived) fee is a conflict.
/// A failure sending the confirmation email is logged, not propagated.
pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(body): Json<PaymentBody>,
) -> AppResult<impl IntoResponse> {
    let fee = resolve_fee(&state, &body)?;
    // Reject terminal fees before talking to the gateway.
    hms_core::fee::validate_transition(fee.status, hms_core::fee::FeeStatus::Paid)?;

    let req = PaymentRequest {
        student_id: body.student_id,
        fee_id: fee.id,
        fee_type: fee.fee_type,
        amount: fee.amount,
    };
    let intent = gateway::call_with_timeout(
        state.config.external_call_timeout_secs,
        state.payments.confirm_payment(&req),
    )
    .await?;

    let today = chrono::Utc::now().date_naive();
    let fee = FeeRepo::mark_paid(&state.db, body.fee_id, today)?;

    // Confirmation email is fire-and-forget.
    if let Ok(student) = StudentRepo::find(&state.db, fee.student_id) {
        let notifier = state.notifier.clone();
        let timeout = state.config.external_call_timeout_secs;
        let msg = EmailMessage {
            to: student.email,
            subject: "Payment received".to_string(),
            body: format!("Payment of {} received for fee {}", fee.amount, fee.id),
            category: "payment_confirmation".to_string(),
        };
        tokio::spawn(async move {
            if let Err(e) = gateway::call_with_timeout(timeout, notifier.send_email(&msg)).await {
                tracing::warn!(error = %e, "Payment confirmation email failed");
            }
        });
    }

    Ok(Json(DataResponse {
        data: PaymentOutcome {
            transaction_id: intent.id,
            fee,
        },
    }))
}
