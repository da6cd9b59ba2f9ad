use chrono::NaiveDate;

use hms_core::error::CoreError;
use hms_core::types::{DbId, Timestamp};
use hms_core::visitor::{validate_registration, VisitorRecord, VisitorStatus};

use crate::models::visitor::RegisterVisitor;
use crate::store::{self, MemDb};

use super::StudentRepo;

/// Read and mutation access to the visitor log.
pub struct VisitorRepo;

impl VisitorRepo {
    /// The full visitor log in insertion order, optionally narrowed by
    /// student and/or check-in date.
    pub fn list(
        db: &MemDb,
        student_id: Option<DbId>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<VisitorRecord>, CoreError> {
        Ok(store::read(&db.visitors)?
            .iter()
            .filter(|v| student_id.is_none_or(|id| v.student_id == id))
            .filter(|v| date.is_none_or(|d| v.check_in_time.date_naive() == d))
            .cloned()
            .collect())
    }

    /// Register a visitor, checked in as of `now` unless the caller
    /// supplies an explicit check-in time.
    pub fn register(
        db: &MemDb,
        input: &RegisterVisitor,
        now: Timestamp,
    ) -> Result<VisitorRecord, CoreError> {
        validate_registration(&input.visitor_name, &input.visitor_phone)?;
        let student = StudentRepo::find(db, input.student_id)?;

        let record = VisitorRecord {
            id: db.next_id(),
            student_id: student.id,
            visitor_name: input.visitor_name.clone(),
            visitor_phone: input.visitor_phone.clone(),
            purpose: input.purpose,
            check_in_time: input.check_in_time.unwrap_or(now),
            check_out_time: None,
            status: VisitorStatus::CheckedIn,
            created_at: now,
        };
        store::write(&db.visitors)?.push(record.clone());
        Ok(record)
    }

    /// Check a visitor out. Unknown ids are not found; a second check-out
    /// is a conflict and leaves the record unchanged.
    pub fn check_out(db: &MemDb, id: DbId, at: Timestamp) -> Result<VisitorRecord, CoreError> {
        let mut visitors = store::write(&db.visitors)?;
        let record = visitors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Visitor",
                id,
            })?;
        record.check_out(at)?;
        Ok(record.clone())
    }
}
