use hms_core::error::CoreError;
use hms_core::student::Student;
use hms_core::types::DbId;

use crate::store::{self, MemDb};

/// Read and update access to students.
pub struct StudentRepo;

impl StudentRepo {
    /// All students in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<Student>, CoreError> {
        Ok(store::read(&db.students)?.clone())
    }

    /// A single student by id.
    pub fn find(db: &MemDb, id: DbId) -> Result<Student, CoreError> {
        store::read(&db.students)?
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Student",
                id,
            })
    }

    /// Point a student at a room (or clear the link with `None`).
    pub fn set_room(db: &MemDb, id: DbId, room_id: Option<DbId>) -> Result<Student, CoreError> {
        let mut students = store::write(&db.students)?;
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Student",
                id,
            })?;
        student.room_id = room_id;
        Ok(student.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn find_unknown_student_is_not_found() {
        let db = MemDb::seeded();
        assert_matches!(
            StudentRepo::find(&db, 999),
            Err(CoreError::NotFound { entity: "Student", id: 999 })
        );
    }

    #[test]
    fn set_room_updates_the_link() {
        let db = MemDb::seeded();
        let student = StudentRepo::set_room(&db, 3, Some(3)).unwrap();
        assert_eq!(student.room_id, Some(3));
        assert_eq!(StudentRepo::find(&db, 3).unwrap().room_id, Some(3));
    }
}
