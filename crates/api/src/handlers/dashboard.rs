//! Role dashboard aggregation endpoints.
//!
//! Each endpoint snapshots the relevant collections and runs them through
//! the domain aggregation functions; nothing here is cached or stored.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use hms_core::complaint::{Complaint, ComplaintStatus};
use hms_core::fee::Fee;
use hms_core::notice::Notice;
use hms_core::stats::{self, ComplaintStats, FeeTotals, OccupancySummary};
use hms_core::student::Student;
use hms_core::types::DbId;
use hms_db::repositories::{ComplaintRepo, FeeRepo, NoticeRepo, RoomRepo, StudentRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub students_total: usize,
    pub occupancy: OccupancySummary,
    pub fees: FeeTotals,
    pub complaints: ComplaintStats,
}

/// Payload for the warden dashboard.
#[derive(Debug, Serialize)]
pub struct WardenDashboard {
    pub occupancy: OccupancySummary,
    pub open_complaints: usize,
    pub pending_fee_total: i64,
    /// Open and in-progress complaints, for the triage list.
    pub active_complaints: Vec<Complaint>,
}

/// Payload for one student's dashboard.
#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub student: Student,
    pub fees: Vec<Fee>,
    pub fee_totals: FeeTotals,
    pub active_complaints: Vec<Complaint>,
    pub notices: Vec<Notice>,
}

/// GET /api/v1/dashboard/admin
///
/// Hostel-wide totals: headcount, occupancy, fee totals by status, and
/// complaint counts.
pub async fn admin_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let students = StudentRepo::list(&state.db)?;
    let rooms = RoomRepo::list(&state.db)?;
    let fees = FeeRepo::list(&state.db)?;
    let complaints = ComplaintRepo::list(&state.db)?;

    Ok(Json(DataResponse {
        data: AdminDashboard {
            students_total: students.len(),
            occupancy: stats::occupancy(&rooms),
            fees: stats::fee_totals(&fees, today),
            complaints: stats::complaint_stats(&complaints),
        },
    }))
}

/// GET /api/v1/dashboard/warden
///
/// Day-to-day view: occupancy rate, open complaint count, outstanding
/// pending fees, and the active complaint triage list.
pub async fn warden_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let rooms = RoomRepo::list(&state.db)?;
    let fees = FeeRepo::list(&state.db)?;
    let complaints = ComplaintRepo::list(&state.db)?;

    let complaint_stats = stats::complaint_stats(&complaints);
    let active_complaints: Vec<Complaint> = complaints
        .into_iter()
        .filter(|c| {
            matches!(
                c.status,
                ComplaintStatus::Open | ComplaintStatus::InProgress
            )
        })
        .collect();

    Ok(Json(DataResponse {
        data: WardenDashboard {
            occupancy: stats::occupancy(&rooms),
            open_complaints: complaint_stats.open,
            pending_fee_total: stats::fee_totals(&fees, today).pending,
            active_complaints,
        },
    }))
}

/// GET /api/v1/dashboard/student/{id}
///
/// One student's view: their fees (statuses as of today), fee totals,
/// active complaints, and the current notice board.
pub async fn student_dashboard(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let student = StudentRepo::find(&state.db, id)?;

    let fees: Vec<Fee> = FeeRepo::list_for_student(&state.db, id)?
        .into_iter()
        .map(|mut fee| {
            fee.status = fee.effective_status(today);
            fee
        })
        .collect();
    let fee_totals = stats::fee_totals(&fees, today);

    let active_complaints: Vec<Complaint> = ComplaintRepo::list_for_student(&state.db, id)?
        .into_iter()
        .filter(|c| {
            matches!(
                c.status,
                ComplaintStatus::Open | ComplaintStatus::InProgress
            )
        })
        .collect();

    Ok(Json(DataResponse {
        data: StudentDashboard {
            student,
            fees,
            fee_totals,
            active_complaints,
            notices: NoticeRepo::list_active(&state.db)?,
        },
    }))
}
