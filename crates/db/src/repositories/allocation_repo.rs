use chrono::NaiveDate;

use hms_core::allocation::{validate_no_active_allocation, AllocationStatus, RoomAllocation};
use hms_core::error::CoreError;
use hms_core::types::DbId;

use crate::models::allocation::NewAllocation;
use crate::store::{self, MemDb};

use super::{RoomRepo, StudentRepo};

/// Read and mutation access to room allocations.
pub struct AllocationRepo;

impl AllocationRepo {
    /// All allocations in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<RoomAllocation>, CoreError> {
        Ok(store::read(&db.allocations)?.clone())
    }

    /// Allocations for one student.
    pub fn list_for_student(db: &MemDb, student_id: DbId) -> Result<Vec<RoomAllocation>, CoreError> {
        Ok(store::read(&db.allocations)?
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    /// Allocate a room to a student.
    ///
    /// Fails when the student or room is unknown, the room is full or
    /// under maintenance, or the student already holds an active
    /// allocation. On success the room's occupant list and the student's
    /// room link are updated alongside the new allocation record.
    pub fn allocate(
        db: &MemDb,
        input: &NewAllocation,
        today: NaiveDate,
    ) -> Result<RoomAllocation, CoreError> {
        let student = StudentRepo::find(db, input.student_id)?;
        let mut room = RoomRepo::find(db, input.room_id)?;

        if !room.has_vacancy() {
            return Err(CoreError::Conflict(format!(
                "Room {} has no vacancy",
                room.room_number
            )));
        }
        validate_no_active_allocation(&Self::list(db)?, student.id)?;

        let allocation = RoomAllocation {
            id: db.next_id(),
            student_id: student.id,
            student_name: student.name.clone(),
            room_id: room.id,
            room_number: room.room_number.clone(),
            allocation_date: input.allocation_date.unwrap_or(today),
            release_date: None,
            status: AllocationStatus::Active,
        };

        room.occupants.push(student.name.clone());
        room.status = room.derived_status();
        RoomRepo::update(db, room)?;
        StudentRepo::set_room(db, student.id, Some(input.room_id))?;

        store::write(&db.allocations)?.push(allocation.clone());
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hms_core::room::RoomStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    fn input(student_id: DbId, room_id: DbId) -> NewAllocation {
        NewAllocation {
            student_id,
            room_id,
            allocation_date: None,
        }
    }

    #[test]
    fn allocate_updates_room_and_student() {
        let db = MemDb::seeded();
        // Student 3 shares room 1 but holds no allocation record yet.
        let allocation = AllocationRepo::allocate(&db, &input(3, 3), today()).unwrap();

        assert_eq!(allocation.status, AllocationStatus::Active);
        assert_eq!(allocation.room_number, "A-103");

        let room = RoomRepo::find(&db, 3).unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
        assert!(room.occupants.contains(&"Arjun Patel".to_string()));
        assert_eq!(StudentRepo::find(&db, 3).unwrap().room_id, Some(3));
    }

    #[test]
    fn second_active_allocation_rejected() {
        let db = MemDb::seeded();
        // Student 1 already holds allocation 1.
        let result = AllocationRepo::allocate(&db, &input(1, 3), today());
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[test]
    fn full_room_rejected() {
        let db = MemDb::seeded();
        // Room 1 is a double with two occupants.
        let result = AllocationRepo::allocate(&db, &input(3, 1), today());
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[test]
    fn maintenance_room_rejected() {
        let db = MemDb::seeded();
        let result = AllocationRepo::allocate(&db, &input(3, 4), today());
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[test]
    fn unknown_student_rejected() {
        let db = MemDb::seeded();
        assert_matches!(
            AllocationRepo::allocate(&db, &input(999, 3), today()),
            Err(CoreError::NotFound { entity: "Student", .. })
        );
    }
}
