use hms_core::complaint::{self, Complaint, ComplaintStatus};
use hms_core::error::CoreError;
use hms_core::types::{DbId, Timestamp};

use crate::models::complaint::NewComplaint;
use crate::store::{self, MemDb};

use super::StudentRepo;

/// Read and mutation access to complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// All complaints in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<Complaint>, CoreError> {
        Ok(store::read(&db.complaints)?.clone())
    }

    /// Complaints raised by one student.
    pub fn list_for_student(db: &MemDb, student_id: DbId) -> Result<Vec<Complaint>, CoreError> {
        Ok(store::read(&db.complaints)?
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect())
    }

    /// A single complaint by id.
    pub fn find(db: &MemDb, id: DbId) -> Result<Complaint, CoreError> {
        store::read(&db.complaints)?
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Complaint",
                id,
            })
    }

    /// Raise a complaint against the student's current room.
    pub fn create(db: &MemDb, input: &NewComplaint, now: Timestamp) -> Result<Complaint, CoreError> {
        if input.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Complaint description must not be empty".to_string(),
            ));
        }
        let student = StudentRepo::find(db, input.student_id)?;
        let room_id = student.room_id.ok_or_else(|| {
            CoreError::Validation(format!(
                "Student {} has no room to complain against",
                student.id
            ))
        })?;
        let room = super::RoomRepo::find(db, room_id)?;

        let complaint = Complaint {
            id: db.next_id(),
            student_id: student.id,
            student_name: student.name,
            room_id: room.id,
            room_number: room.room_number,
            category: input.category,
            description: input.description.clone(),
            status: ComplaintStatus::Open,
            priority: input.priority,
            created_at: now,
            resolved_at: None,
        };
        store::write(&db.complaints)?.push(complaint.clone());
        Ok(complaint)
    }

    /// Move a complaint through its workflow.
    ///
    /// Transitions are forward-only; entering `Resolved` or `Closed`
    /// stamps the resolution time if not already set.
    pub fn update_status(
        db: &MemDb,
        id: DbId,
        status: ComplaintStatus,
        now: Timestamp,
    ) -> Result<Complaint, CoreError> {
        let mut complaints = store::write(&db.complaints)?;
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Complaint",
                id,
            })?;

        complaint::validate_transition(complaint.status, status)?;
        complaint.status = status;
        if matches!(status, ComplaintStatus::Resolved | ComplaintStatus::Closed)
            && complaint.resolved_at.is_none()
        {
            complaint.resolved_at = Some(now);
        }
        Ok(complaint.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};
    use hms_core::complaint::{ComplaintCategory, Priority};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 12, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn create_resolves_student_and_room_labels() {
        let db = MemDb::seeded();
        let complaint = ComplaintRepo::create(
            &db,
            &NewComplaint {
                student_id: 2,
                category: ComplaintCategory::Cleanliness,
                description: "Corridor not cleaned this week".to_string(),
                priority: Priority::Low,
            },
            now(),
        )
        .unwrap();

        assert_eq!(complaint.student_name, "Priya Gupta");
        assert_eq!(complaint.room_number, "A-102");
        assert_eq!(complaint.status, ComplaintStatus::Open);
        assert_eq!(complaint.created_at, now());
    }

    #[test]
    fn blank_description_rejected() {
        let db = MemDb::seeded();
        let result = ComplaintRepo::create(
            &db,
            &NewComplaint {
                student_id: 2,
                category: ComplaintCategory::Other,
                description: "  ".to_string(),
                priority: Priority::Low,
            },
            now(),
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn resolving_stamps_resolution_time() {
        let db = MemDb::seeded();
        let complaint = ComplaintRepo::update_status(&db, 2, ComplaintStatus::Resolved, now()).unwrap();
        assert_eq!(complaint.resolved_at, Some(now()));
        assert!(complaint.resolved_at.unwrap() >= complaint.created_at);
    }

    #[test]
    fn reopening_is_a_conflict() {
        let db = MemDb::seeded();
        // Complaint 3 is already resolved.
        let result = ComplaintRepo::update_status(&db, 3, ComplaintStatus::Open, now());
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[test]
    fn closing_a_resolved_complaint_keeps_original_resolution_time() {
        let db = MemDb::seeded();
        let before = ComplaintRepo::find(&db, 3).unwrap().resolved_at;
        let complaint = ComplaintRepo::update_status(&db, 3, ComplaintStatus::Closed, now()).unwrap();
        assert_eq!(complaint.resolved_at, before);
    }
}
