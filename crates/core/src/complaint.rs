//! Complaints and their resolution workflow.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// What a complaint is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintCategory {
    Maintenance,
    Cleanliness,
    Noise,
    Water,
    Electricity,
    Other,
}

/// Workflow status of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

/// Urgency of a complaint or announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A complaint raised by a student against their room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub room_id: DbId,
    pub room_number: String,
    pub category: ComplaintCategory,
    pub description: String,
    pub status: ComplaintStatus,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

impl Complaint {
    /// A resolved or closed complaint must carry a resolution timestamp
    /// no earlier than its creation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if matches!(self.status, ComplaintStatus::Resolved | ComplaintStatus::Closed) {
            match self.resolved_at {
                None => {
                    return Err(CoreError::Validation(format!(
                        "Complaint {}: {:?} without a resolution timestamp",
                        self.id, self.status
                    )))
                }
                Some(at) if at < self.created_at => {
                    return Err(CoreError::Validation(format!(
                        "Complaint {}: resolved before it was created",
                        self.id
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Position of a status in the Open -> InProgress -> Resolved -> Closed
/// workflow. Used to enforce forward-only movement.
fn rank(status: ComplaintStatus) -> u8 {
    match status {
        ComplaintStatus::Open => 0,
        ComplaintStatus::InProgress => 1,
        ComplaintStatus::Resolved => 2,
        ComplaintStatus::Closed => 3,
    }
}

/// Whether `from -> to` is a legal complaint transition.
///
/// Movement is strictly forward through the workflow; skipping a stage
/// (e.g. Open -> Resolved) is allowed, reopening is not.
pub fn can_transition(from: ComplaintStatus, to: ComplaintStatus) -> bool {
    rank(to) > rank(from)
}

/// Validate a transition, with a message naming both endpoints.
pub fn validate_transition(from: ComplaintStatus, to: ComplaintStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Invalid complaint status transition: {from:?} -> {to:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn complaint(status: ComplaintStatus, resolved_at: Option<Timestamp>) -> Complaint {
        Complaint {
            id: 1,
            student_id: 1,
            student_name: "Raj Kumar".to_string(),
            room_id: 1,
            room_number: "A-101".to_string(),
            category: ComplaintCategory::Water,
            description: "Water leakage from ceiling".to_string(),
            status,
            priority: Priority::High,
            created_at: Utc.with_ymd_and_hms(2024, 11, 20, 9, 0, 0).unwrap(),
            resolved_at,
        }
    }

    #[test]
    fn forward_transitions_allowed() {
        assert!(can_transition(ComplaintStatus::Open, ComplaintStatus::InProgress));
        assert!(can_transition(ComplaintStatus::InProgress, ComplaintStatus::Resolved));
        assert!(can_transition(ComplaintStatus::Resolved, ComplaintStatus::Closed));
    }

    #[test]
    fn skipping_in_progress_allowed() {
        assert!(can_transition(ComplaintStatus::Open, ComplaintStatus::Resolved));
        assert!(can_transition(ComplaintStatus::Open, ComplaintStatus::Closed));
    }

    #[test]
    fn reopening_rejected() {
        assert!(!can_transition(ComplaintStatus::Resolved, ComplaintStatus::Open));
        assert!(!can_transition(ComplaintStatus::Closed, ComplaintStatus::InProgress));
        assert!(!can_transition(ComplaintStatus::Open, ComplaintStatus::Open));
    }

    #[test]
    fn validate_transition_reports_endpoints() {
        let err = validate_transition(ComplaintStatus::Closed, ComplaintStatus::Open).unwrap_err();
        assert!(err.to_string().contains("Closed -> Open"));
    }

    #[test]
    fn resolved_without_timestamp_invalid() {
        assert!(complaint(ComplaintStatus::Resolved, None).validate().is_err());
    }

    #[test]
    fn resolved_before_created_invalid() {
        let early = Utc.with_ymd_and_hms(2024, 11, 19, 9, 0, 0).unwrap();
        assert!(complaint(ComplaintStatus::Resolved, Some(early)).validate().is_err());
    }

    #[test]
    fn resolved_after_created_valid() {
        let later = Utc.with_ymd_and_hms(2024, 11, 21, 9, 0, 0).unwrap();
        assert!(complaint(ComplaintStatus::Resolved, Some(later)).validate().is_ok());
    }

    #[test]
    fn open_complaint_needs_no_resolution() {
        assert!(complaint(ComplaintStatus::Open, None).validate().is_ok());
    }
}
