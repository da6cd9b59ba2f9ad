//! Room allocations: the bounded assignment of a student to a room.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Lifecycle status of an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    Active,
    Released,
    Pending,
}

/// Assignment of a student to a room for a bounded period.
///
/// `student_name` and `room_number` are denormalized display labels carried
/// alongside the ids, matching what the dashboards render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAllocation {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub room_id: DbId,
    pub room_number: String,
    pub allocation_date: NaiveDate,
    pub release_date: Option<NaiveDate>,
    pub status: AllocationStatus,
}

impl RoomAllocation {
    /// A released allocation must carry a release date, and an allocation
    /// with a release date must not still be active.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.release_date.is_some() && self.status == AllocationStatus::Active {
            return Err(CoreError::Validation(format!(
                "Allocation {} has a release date but is still active",
                self.id
            )));
        }
        Ok(())
    }
}

/// Enforce the one-active-allocation-per-student rule before creating a
/// new active allocation for `student_id`.
pub fn validate_no_active_allocation(
    allocations: &[RoomAllocation],
    student_id: DbId,
) -> Result<(), CoreError> {
    let clash = allocations
        .iter()
        .find(|a| a.student_id == student_id && a.status == AllocationStatus::Active);
    match clash {
        Some(existing) => Err(CoreError::Conflict(format!(
            "Student {student_id} already holds active allocation {} in room {}",
            existing.id, existing.room_number
        ))),
        None => Ok(()),
    }
}
