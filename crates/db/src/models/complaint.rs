use serde::Deserialize;

use hms_core::complaint::{ComplaintCategory, ComplaintStatus, Priority};
use hms_core::types::DbId;

/// DTO for raising a complaint.
#[derive(Debug, Deserialize)]
pub struct NewComplaint {
    pub student_id: DbId,
    pub category: ComplaintCategory,
    pub description: String,
    pub priority: Priority,
}

/// DTO for moving a complaint through its workflow.
#[derive(Debug, Deserialize)]
pub struct UpdateComplaintStatus {
    pub status: ComplaintStatus,
}
