use chrono::NaiveDate;
use serde::Deserialize;

use hms_core::attendance::{AttendanceStatus, LeaveType};
use hms_core::types::DbId;

/// DTO for recording (or overwriting) one student's mark for one day.
#[derive(Debug, Deserialize)]
pub struct RecordAttendance {
    pub student_id: DbId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Required iff `status` is `on_leave`.
    pub leave_type: Option<LeaveType>,
}
