use chrono::NaiveDate;
use serde::Deserialize;

use hms_core::types::DbId;

/// DTO for allocating a room to a student.
#[derive(Debug, Deserialize)]
pub struct NewAllocation {
    pub student_id: DbId,
    pub room_id: DbId,
    /// Defaults to today when omitted.
    pub allocation_date: Option<NaiveDate>,
}
