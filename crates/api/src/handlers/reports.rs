//! Handlers for the `/reports` resource.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use serde::Deserialize;
use hms_core::report::{self, DateRange, ReportType};
use hms_db::repositories::{ComplaintRepo, FeeRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Query params for `GET /reports/export`.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub report_type: String,
    /// `csv` (default) or `excel`.
    pub format: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /api/v1/reports/export
///
/// Export an entity collection as delimited text: one header row of
/// field names, one row per record, values in declaration order.
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    let report_type = ReportType::parse(&params.report_type)?;
    let range = DateRange {
        start: params.start_date,
        end: params.end_date,
    };

    let payload = match report_type {
        ReportType::Fees => report::fee_report(&FeeRepo::list(&state.db)?, &range)?,
        ReportType::Complaints => {
            report::complaint_report(&ComplaintRepo::list(&state.db)?, &range)?
        }
    };

    let excel = params.format.as_deref() == Some("excel");
    let content_type = if excel {
        "application/vnd.ms-excel"
    } else {
        "text/csv"
    };
    let filename = if excel { "report.xlsx" } else { "report.csv" };

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        payload,
    ))
}
