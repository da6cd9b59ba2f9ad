//! Rooms, their capacity, and the occupancy-derived status rule.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Availability status of a room.
///
/// `Maintenance` is an administrative override; the other two values are
/// fully determined by the occupant list (see [`Room::derived_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

/// Bed configuration of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Triple,
    Quad,
}

/// A hostel room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: DbId,
    pub room_number: String,
    pub capacity: i32,
    pub floor: i32,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub occupants: Vec<String>,
    pub maintenance_notes: Option<String>,
}

impl Room {
    /// Status the room should carry given its occupant list.
    ///
    /// A room under maintenance keeps that status regardless of occupants;
    /// otherwise `Occupied` iff at least one occupant is present.
    pub fn derived_status(&self) -> RoomStatus {
        if self.status == RoomStatus::Maintenance {
            RoomStatus::Maintenance
        } else if self.occupants.is_empty() {
            RoomStatus::Available
        } else {
            RoomStatus::Occupied
        }
    }

    /// Whether another occupant fits.
    pub fn has_vacancy(&self) -> bool {
        self.status != RoomStatus::Maintenance && (self.occupants.len() as i32) < self.capacity
    }

    /// Check the room's structural invariants: occupant count within
    /// capacity, and stored status consistent with the occupant list.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.capacity <= 0 {
            return Err(CoreError::Validation(format!(
                "Room {}: capacity must be positive",
                self.room_number
            )));
        }
        if self.occupants.len() as i32 > self.capacity {
            return Err(CoreError::Validation(format!(
                "Room {}: {} occupants exceed capacity {}",
                self.room_number,
                self.occupants.len(),
                self.capacity
            )));
        }
        if self.status != self.derived_status() {
            return Err(CoreError::Validation(format!(
                "Room {}: stored status {:?} does not match occupancy",
                self.room_number, self.status
            )));
        }
        Ok(())
    }
}
