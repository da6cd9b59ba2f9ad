use chrono::NaiveDate;

use hms_core::error::CoreError;
use hms_core::fee::{self, Fee, FeeStatus};
use hms_core::types::DbId;

use crate::store::{self, MemDb};

/// Read and mutation access to fees.
pub struct FeeRepo;

impl FeeRepo {
    /// All fees in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<Fee>, CoreError> {
        Ok(store::read(&db.fees)?.clone())
    }

    /// Fees charged to one student.
    pub fn list_for_student(db: &MemDb, student_id: DbId) -> Result<Vec<Fee>, CoreError> {
        Ok(store::read(&db.fees)?
            .iter()
            .filter(|f| f.student_id == student_id)
            .cloned()
            .collect())
    }

    /// A single fee by id.
    pub fn find(db: &MemDb, id: DbId) -> Result<Fee, CoreError> {
        store::read(&db.fees)?
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Fee", id })
    }

    /// Mark a fee paid, stamping the payment date.
    ///
    /// Paying a fee that is already paid (or waived) is a conflict; the
    /// stored record is left untouched in that case.
    pub fn mark_paid(db: &MemDb, id: DbId, payment_date: NaiveDate) -> Result<Fee, CoreError> {
        let mut fees = store::write(&db.fees)?;
        let fee = fees
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(CoreError::NotFound { entity: "Fee", id })?;

        fee::validate_transition(fee.status, FeeStatus::Paid)?;
        fee.status = FeeStatus::Paid;
        fee.payment_date = Some(payment_date);
        Ok(fee.clone())
    }
}
