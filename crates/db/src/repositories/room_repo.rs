use hms_core::error::CoreError;
use hms_core::room::Room;
use hms_core::types::DbId;

use crate::store::{self, MemDb};

/// Read and update access to rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// All rooms in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<Room>, CoreError> {
        Ok(store::read(&db.rooms)?.clone())
    }

    /// A single room by id.
    pub fn find(db: &MemDb, id: DbId) -> Result<Room, CoreError> {
        store::read(&db.rooms)?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Room", id })
    }

    /// Replace a room wholesale after validating its invariants.
    pub fn update(db: &MemDb, room: Room) -> Result<Room, CoreError> {
        room.validate()?;
        let mut rooms = store::write(&db.rooms)?;
        let slot = rooms
            .iter_mut()
            .find(|r| r.id == room.id)
            .ok_or(CoreError::NotFound {
                entity: "Room",
                id: room.id,
            })?;
        *slot = room.clone();
        Ok(room)
    }
}
