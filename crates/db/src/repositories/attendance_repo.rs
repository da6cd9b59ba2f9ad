use hms_core::attendance::{validate_leave_type, AttendanceRecord};
use hms_core::error::CoreError;
use hms_core::types::{DbId, Timestamp};

use crate::models::attendance::RecordAttendance;
use crate::store::{self, MemDb};

use super::StudentRepo;

/// Read and mutation access to attendance marks.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// All marks in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<AttendanceRecord>, CoreError> {
        Ok(store::read(&db.attendance)?.clone())
    }

    /// Marks for one student.
    pub fn list_for_student(db: &MemDb, student_id: DbId) -> Result<Vec<AttendanceRecord>, CoreError> {
        Ok(store::read(&db.attendance)?
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    /// Marks falling in one calendar month.
    pub fn list_for_month(db: &MemDb, year: i32, month: u32) -> Result<Vec<AttendanceRecord>, CoreError> {
        Ok(store::read(&db.attendance)?
            .iter()
            .filter(|a| a.in_month(year, month))
            .cloned()
            .collect())
    }

    /// Record one student's mark for one day.
    ///
    /// Upserts on `(student_id, date)`: a second call for the same key
    /// overwrites the stored status and leave type in place, keeping the
    /// original id, so exactly one record exists per key.
    pub fn record(
        db: &MemDb,
        input: &RecordAttendance,
        now: Timestamp,
    ) -> Result<AttendanceRecord, CoreError> {
        validate_leave_type(input.status, input.leave_type)?;
        StudentRepo::find(db, input.student_id)?;

        let mut records = store::write(&db.attendance)?;
        if let Some(existing) = records
            .iter_mut()
            .find(|a| a.student_id == input.student_id && a.date == input.date)
        {
            existing.status = input.status;
            existing.leave_type = input.leave_type;
            existing.recorded_at = now;
            return Ok(existing.clone());
        }

        let record = AttendanceRecord {
            id: db.next_id(),
            student_id: input.student_id,
            date: input.date,
            status: input.status,
            leave_type: input.leave_type,
            recorded_at: now,
        };
        records.push(record.clone());
        Ok(record)
    }
}
