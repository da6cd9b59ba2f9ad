//! Visitor log entries and the check-in/check-out transition.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Why the visitor is on the premises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPurpose {
    Meeting,
    Delivery,
    Personal,
}

/// Whether the visitor is still inside. Checked-out is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    CheckedIn,
    CheckedOut,
}

/// One visit by one visitor to one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub visitor_name: String,
    pub visitor_phone: String,
    pub purpose: VisitPurpose,
    pub check_in_time: Timestamp,
    pub check_out_time: Option<Timestamp>,
    pub status: VisitorStatus,
    pub created_at: Timestamp,
}

impl VisitorRecord {
    /// Transition to checked-out, stamping the departure time.
    ///
    /// A second check-out is a conflict and leaves the record untouched;
    /// a departure before arrival is a validation error.
    pub fn check_out(&mut self, at: Timestamp) -> Result<(), CoreError> {
        if self.status == VisitorStatus::CheckedOut {
            return Err(CoreError::Conflict(format!(
                "Visitor {} is already checked out",
                self.id
            )));
        }
        if at < self.check_in_time {
            return Err(CoreError::Validation(format!(
                "Check-out time precedes check-in for visitor {}",
                self.id
            )));
        }
        self.check_out_time = Some(at);
        self.status = VisitorStatus::CheckedOut;
        Ok(())
    }
}

/// Visitor name and phone are required fields on registration.
pub fn validate_registration(visitor_name: &str, visitor_phone: &str) -> Result<(), CoreError> {
    if visitor_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Visitor name must not be empty".to_string(),
        ));
    }
    if visitor_phone.trim().is_empty() {
        return Err(CoreError::Validation(
            "Visitor phone must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> VisitorRecord {
        let at = Utc.with_ymd_and_hms(2024, 11, 20, 10, 0, 0).unwrap();
        VisitorRecord {
            id: 1,
            student_id: 1,
            visitor_name: "Anil Kumar".to_string(),
            visitor_phone: "+91-9876500000".to_string(),
            purpose: VisitPurpose::Personal,
            check_in_time: at,
            check_out_time: None,
            status: VisitorStatus::CheckedIn,
            created_at: at,
        }
    }

    #[test]
    fn check_out_stamps_time_and_status() {
        let mut v = record();
        let out = Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap();
        v.check_out(out).unwrap();
        assert_eq!(v.status, VisitorStatus::CheckedOut);
        assert_eq!(v.check_out_time, Some(out));
    }

    #[test]
    fn double_check_out_is_conflict_and_state_unchanged() {
        let mut v = record();
        let first = Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap();
        v.check_out(first).unwrap();

        let second = Utc.with_ymd_and_hms(2024, 11, 20, 13, 0, 0).unwrap();
        let result = v.check_out(second);
        assert!(matches!(result, Err(CoreError::Conflict(_))));
        assert_eq!(v.check_out_time, Some(first));
    }

    #[test]
    fn check_out_before_check_in_rejected() {
        let mut v = record();
        let early = Utc.with_ymd_and_hms(2024, 11, 20, 9, 0, 0).unwrap();
        assert!(matches!(v.check_out(early), Err(CoreError::Validation(_))));
        assert_eq!(v.status, VisitorStatus::CheckedIn);
    }

    #[test]
    fn blank_name_rejected_on_registration() {
        assert!(validate_registration("", "+91-9876500000").is_err());
    }

    #[test]
    fn blank_phone_rejected_on_registration() {
        assert!(validate_registration("Anil Kumar", "   ").is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&VisitorStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked_in\"");
    }
}
