//! Student residents and their residency window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Residency status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    Active,
    Inactive,
    OnLeave,
}

/// A student resident.
///
/// `room_id` is `None` while the student is unallocated. Referential
/// integrity against the room collection is checked at the action layer,
/// which is the only place both collections are in hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub enrollment_number: String,
    pub department: String,
    pub semester: i32,
    pub status: StudentStatus,
    pub email: String,
    pub phone: String,
    pub room_id: Option<DbId>,
    pub check_in_date: NaiveDate,
    pub check_out_date: Option<NaiveDate>,
}

/// Validate that a check-out date, when present, does not precede check-in.
pub fn validate_residency_window(
    check_in: NaiveDate,
    check_out: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if let Some(out) = check_out {
        if out < check_in {
            return Err(CoreError::Validation(format!(
                "Check-out date {out} precedes check-in date {check_in}"
            )));
        }
    }
    Ok(())
}
