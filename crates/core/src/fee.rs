//! Fees, the payment state machine, and the read-time overdue rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// What a fee is charged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    RoomCharge,
    Maintenance,
    Utility,
    Other,
}

/// Payment status of a fee. `Paid` and `Waived` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    Pending,
    Paid,
    Overdue,
    Waived,
}

/// A fee charged to a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub fee_type: FeeType,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    pub status: FeeStatus,
    pub remarks: String,
}

impl Fee {
    /// Status as it should be reported for `today`.
    ///
    /// Overdue is not flipped by a background timer; a pending fee whose
    /// due date has elapsed without payment simply reads as overdue. All
    /// callers (dashboards, aggregates, reports) go through this so the
    /// rule lives in exactly one place.
    pub fn effective_status(&self, today: NaiveDate) -> FeeStatus {
        if self.status == FeeStatus::Pending && self.payment_date.is_none() && self.due_date < today
        {
            FeeStatus::Overdue
        } else {
            self.status
        }
    }

    /// A paid fee must carry a payment date.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.amount <= 0 {
            return Err(CoreError::Validation(format!(
                "Fee {}: amount must be positive",
                self.id
            )));
        }
        if self.status == FeeStatus::Paid && self.payment_date.is_none() {
            return Err(CoreError::Validation(format!(
                "Fee {}: paid without a payment date",
                self.id
            )));
        }
        Ok(())
    }
}

/// Valid target statuses reachable from `from`.
///
/// `Paid` and `Waived` are terminal. `Pending -> Overdue` appears here for
/// completeness even though overdue is normally derived at read time rather
/// than written back.
pub fn valid_transitions(from: FeeStatus) -> &'static [FeeStatus] {
    match from {
        FeeStatus::Pending => &[FeeStatus::Paid, FeeStatus::Overdue],
        FeeStatus::Overdue => &[FeeStatus::Paid],
        FeeStatus::Paid | FeeStatus::Waived => &[],
    }
}

/// Whether `from -> to` is a legal fee status transition.
pub fn can_transition(from: FeeStatus, to: FeeStatus) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a transition, with a message naming both endpoints.
pub fn validate_transition(from: FeeStatus, to: FeeStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Invalid fee status transition: {from:?} -> {to:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fee(status: FeeStatus, due: NaiveDate, paid: Option<NaiveDate>) -> Fee {
        Fee {
            id: 2,
            student_id: 1,
            student_name: "Raj Kumar".to_string(),
            fee_type: FeeType::Maintenance,
            amount: 2000,
            due_date: due,
            payment_date: paid,
            status,
            remarks: String::new(),
        }
    }

    #[test]
    fn pending_past_due_reads_overdue() {
        let f = fee(FeeStatus::Pending, d(2024, 11, 15), None);
        assert_eq!(f.effective_status(d(2024, 12, 1)), FeeStatus::Overdue);
    }

    #[test]
    fn pending_on_due_date_still_pending() {
        let f = fee(FeeStatus::Pending, d(2024, 12, 31), None);
        assert_eq!(f.effective_status(d(2024, 12, 31)), FeeStatus::Pending);
    }

    #[test]
    fn paid_fee_never_reads_overdue() {
        let f = fee(FeeStatus::Paid, d(2024, 11, 15), Some(d(2024, 11, 25)));
        assert_eq!(f.effective_status(d(2025, 1, 1)), FeeStatus::Paid);
    }

    #[test]
    fn waived_fee_never_reads_overdue() {
        let f = fee(FeeStatus::Waived, d(2024, 11, 15), None);
        assert_eq!(f.effective_status(d(2025, 1, 1)), FeeStatus::Waived);
    }

    #[test]
    fn pending_and_overdue_reach_paid() {
        assert!(can_transition(FeeStatus::Pending, FeeStatus::Paid));
        assert!(can_transition(FeeStatus::Overdue, FeeStatus::Paid));
    }

    #[test]
    fn paid_and_waived_are_terminal() {
        assert!(valid_transitions(FeeStatus::Paid).is_empty());
        assert!(valid_transitions(FeeStatus::Waived).is_empty());
    }

    #[test]
    fn paying_a_paid_fee_is_a_conflict() {
        let result = validate_transition(FeeStatus::Paid, FeeStatus::Paid);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid fee status"));
    }

    #[test]
    fn paid_without_payment_date_invalid() {
        let f = fee(FeeStatus::Paid, d(2024, 11, 15), None);
        assert!(f.validate().is_err());
    }

    #[test]
    fn non_positive_amount_invalid() {
        let mut f = fee(FeeStatus::Pending, d(2024, 11, 15), None);
        f.amount = 0;
        assert!(f.validate().is_err());
    }
}
