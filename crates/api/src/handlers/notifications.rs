//! Handlers for the `/notifications` resource.
//!
//! Both endpoints hand the message to the dispatch collaborator and
//! return its receipt; they change no local state.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::gateway;
use crate::gateway::notify::{EmailMessage, SmsMessage};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /notifications/email`.
#[derive(Debug, Deserialize)]
pub struct SendEmail {
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub category: String,
}

/// Body for `POST /notifications/sms`.
#[derive(Debug, Deserialize)]
pub struct SendSms {
    pub phone: String,
    pub message: String,
    #[serde(rename = "type")]
    pub category: String,
}

/// POST /api/v1/notifications/email
pub async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<SendEmail>,
) -> AppResult<impl IntoResponse> {
    let msg = EmailMessage {
        to: body.email,
        subject: body.subject,
        body: body.message,
        category: body.category,
    };
    let receipt = gateway::call_with_timeout(
        state.config.external_call_timeout_secs,
        state.notifier.send_email(&msg),
    )
    .await?;
    Ok(Json(DataResponse { data: receipt }))
}

/// POST /api/v1/notifications/sms
pub async fn send_sms(
    State(state): State<AppState>,
    Json(body): Json<SendSms>,
) -> AppResult<impl IntoResponse> {
    let msg = SmsMessage {
        to: body.phone,
        body: body.message,
        category: body.category,
    };
    let receipt = gateway::call_with_timeout(
        state.config.external_call_timeout_secs,
        state.notifier.send_sms(&msg),
    )
    .await?;
    Ok(Json(DataResponse { data: receipt }))
}
