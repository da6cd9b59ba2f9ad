//! Report export: entity collections rendered as delimited text.
//!
//! A report is one header row of field names followed by one row per
//! record, values in declaration order. Cells containing the delimiter,
//! quotes, or line breaks are quoted so the payload survives a re-parse.

use chrono::NaiveDate;
use serde::Serialize;

use crate::complaint::Complaint;
use crate::error::CoreError;
use crate::fee::Fee;

/// Which collection a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Fees,
    Complaints,
}

impl ReportType {
    /// Parse the `report_type` query value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "fees" => Ok(ReportType::Fees),
            "complaints" => Ok(ReportType::Complaints),
            other => Err(CoreError::Validation(format!(
                "Unknown report type '{other}'. Must be one of: fees, complaints"
            ))),
        }
    }
}

/// Optional inclusive date window applied before rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Whether `date` falls inside the window. Open bounds always match.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// Column order for fee reports. Matches [`Fee`] field declaration order.
pub const FEE_COLUMNS: &[&str] = &[
    "id",
    "student_id",
    "student_name",
    "fee_type",
    "amount",
    "due_date",
    "payment_date",
    "status",
    "remarks",
];

/// Column order for complaint reports. Matches [`Complaint`] declaration order.
pub const COMPLAINT_COLUMNS: &[&str] = &[
    "id",
    "student_id",
    "student_name",
    "room_id",
    "room_number",
    "category",
    "description",
    "status",
    "priority",
    "created_at",
    "resolved_at",
];

/// Render the fee collection as CSV, filtered by due date.
pub fn fee_report(fees: &[Fee], range: &DateRange) -> Result<String, CoreError> {
    let rows = fees
        .iter()
        .filter(|f| range.contains(f.due_date))
        .map(|f| {
            Ok(vec![
                f.id.to_string(),
                f.student_id.to_string(),
                f.student_name.clone(),
                enum_label(&f.fee_type)?,
                f.amount.to_string(),
                f.due_date.to_string(),
                f.payment_date.map(|d| d.to_string()).unwrap_or_default(),
                enum_label(&f.status)?,
                f.remarks.clone(),
            ])
        })
        .collect::<Result<Vec<_>, CoreError>>()?;
    Ok(to_csv(FEE_COLUMNS, &rows))
}

/// Render the complaint collection as CSV, filtered by creation date.
pub fn complaint_report(complaints: &[Complaint], range: &DateRange) -> Result<String, CoreError> {
    let rows = complaints
        .iter()
        .filter(|c| range.contains(c.created_at.date_naive()))
        .map(|c| {
            Ok(vec![
                c.id.to_string(),
                c.student_id.to_string(),
                c.student_name.clone(),
                c.room_id.to_string(),
                c.room_number.clone(),
                enum_label(&c.category)?,
                c.description.clone(),
                enum_label(&c.status)?,
                enum_label(&c.priority)?,
                c.created_at.to_rfc3339(),
                c.resolved_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            ])
        })
        .collect::<Result<Vec<_>, CoreError>>()?;
    Ok(to_csv(COMPLAINT_COLUMNS, &rows))
}

/// Serde wire name of a unit enum variant, used as its report cell value.
fn enum_label<T: Serialize>(value: &T) -> Result<String, CoreError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(other) => Err(CoreError::Internal(format!(
            "Report cell did not serialize to a string: {other}"
        ))),
        Err(e) => Err(CoreError::Internal(format!("Report cell serialization: {e}"))),
    }
}

/// Assemble header and rows into a CSV payload.
fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&headers.iter().map(|h| escape(h)).collect::<Vec<_>>().join(","));
    out.push('\n');
    for row in rows {
        out.push_str(&row.iter().map(|c| escape(c)).collect::<Vec<_>>().join(","));
        out.push('\n');
    }
    out
}

/// Quote a cell when it would otherwise break the row structure.
fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Parse a CSV payload back into a header row and data rows.
///
/// Understands the quoting produced by [`to_csv`]; used by the round-trip
/// tests and by any consumer re-reading an exported report.
pub fn parse_csv(payload: &str) -> Result<(Vec<String>, Vec<Vec<String>>), CoreError> {
    let mut lines = payload.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| CoreError::Validation("Report payload is empty".to_string()))?;
    let headers = parse_row(header_line)?;

    let mut rows = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let row = parse_row(line)?;
        if row.len() != headers.len() {
            return Err(CoreError::Validation(format!(
                "Row has {} cells, expected {}",
                row.len(),
                headers.len()
            )));
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

fn parse_row(line: &str) -> Result<Vec<String>, CoreError> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            '"' => {
                return Err(CoreError::Validation(
                    "Unexpected quote inside unquoted cell".to_string(),
                ))
            }
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err(CoreError::Validation("Unterminated quoted cell".to_string()));
    }
    cells.push(current);
    Ok(cells)
}
