//! Daily attendance records, keyed by student and date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Presence status for one student on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnLeave,
}

/// Kind of leave taken when status is `OnLeave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Sick,
    Casual,
    Emergency,
}

/// One attendance mark. The store guarantees at most one record per
/// `(student_id, date)` by upserting on that key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub leave_type: Option<LeaveType>,
    pub recorded_at: Timestamp,
}

impl AttendanceRecord {
    /// Whether this record falls inside the given calendar month.
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// A leave type is required iff the status is `OnLeave`.
pub fn validate_leave_type(
    status: AttendanceStatus,
    leave_type: Option<LeaveType>,
) -> Result<(), CoreError> {
    match (status, leave_type) {
        (AttendanceStatus::OnLeave, None) => Err(CoreError::Validation(
            "Leave type is required when marking a student on leave".to_string(),
        )),
        (AttendanceStatus::Present | AttendanceStatus::Absent, Some(_)) => {
            Err(CoreError::Validation(
                "Leave type is only valid when the status is on_leave".to_string(),
            ))
        }
        _ => Ok(()),
    }
}
