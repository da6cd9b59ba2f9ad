//! Handlers for the `/automations` resource.
//!
//! Rules are descriptors only; the scheduler that executes them is an
//! external collaborator and never runs in this process.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hms_core::types::DbId;
use hms_db::models::automation::NewAutomation;
use hms_db::repositories::AutomationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/automations
pub async fn list_automations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rules = AutomationRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: rules }))
}

/// POST /api/v1/automations
///
/// Create a rule, enabled from the start. All descriptor fields are
/// required.
pub async fn create_automation(
    State(state): State<AppState>,
    Json(input): Json<NewAutomation>,
) -> AppResult<impl IntoResponse> {
    let rule = AutomationRepo::create(&state.db, &input, chrono::Utc::now())?;
    tracing::info!(rule_id = rule.id, name = %rule.name, "Automation scheduled");
    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}

/// POST /api/v1/automations/{id}/toggle
pub async fn toggle_automation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rule = AutomationRepo::toggle(&state.db, id)?;
    Ok(Json(DataResponse { data: rule }))
}

/// DELETE /api/v1/automations/{id}
pub async fn delete_automation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    AutomationRepo::delete(&state.db, id)?;
    Ok(StatusCode::NO_CONTENT)
}
