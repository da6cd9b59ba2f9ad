//! The in-memory store backing every repository.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hms_core::allocation::RoomAllocation;
use hms_core::attendance::AttendanceRecord;
use hms_core::automation::AutomationRule;
use hms_core::complaint::Complaint;
use hms_core::error::CoreError;
use hms_core::fee::Fee;
use hms_core::notice::{Announcement, Notice};
use hms_core::room::Room;
use hms_core::student::Student;
use hms_core::types::DbId;
use hms_core::user::User;
use hms_core::visitor::VisitorRecord;

/// Seeded stores hand out ids from here so they never collide with the
/// fixed ids in the seed set.
const SEEDED_ID_FLOOR: i64 = 1000;

/// One insertion-ordered collection per entity type plus an id sequence.
///
/// Mutation discipline is "read entire collection, compute, mutate via id
/// lookup"; each repository call takes a lock for the duration of one
/// operation, so writes are serialized per collection.
pub struct MemDb {
    next_id: AtomicI64,
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) students: RwLock<Vec<Student>>,
    pub(crate) rooms: RwLock<Vec<Room>>,
    pub(crate) allocations: RwLock<Vec<RoomAllocation>>,
    pub(crate) fees: RwLock<Vec<Fee>>,
    pub(crate) complaints: RwLock<Vec<Complaint>>,
    pub(crate) notices: RwLock<Vec<Notice>>,
    pub(crate) announcements: RwLock<Vec<Announcement>>,
    pub(crate) visitors: RwLock<Vec<VisitorRecord>>,
    pub(crate) attendance: RwLock<Vec<AttendanceRecord>>,
    pub(crate) automations: RwLock<Vec<AutomationRule>>,
}

impl MemDb {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            users: RwLock::new(Vec::new()),
            students: RwLock::new(Vec::new()),
            rooms: RwLock::new(Vec::new()),
            allocations: RwLock::new(Vec::new()),
            fees: RwLock::new(Vec::new()),
            complaints: RwLock::new(Vec::new()),
            notices: RwLock::new(Vec::new()),
            announcements: RwLock::new(Vec::new()),
            visitors: RwLock::new(Vec::new()),
            attendance: RwLock::new(Vec::new()),
            automations: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-loaded with the demo data set.
    pub fn seeded() -> Self {
        let db = Self::new();
        db.next_id.store(SEEDED_ID_FLOOR, Ordering::SeqCst);
        crate::seed::load(&db);
        db
    }

    /// Next id in the process-wide sequence.
    pub fn next_id(&self) -> DbId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Take a read lock, mapping poisoning to an internal error.
pub(crate) fn read<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>, CoreError> {
    lock.read()
        .map_err(|_| CoreError::Internal("Store lock poisoned".to_string()))
}

/// Take a write lock, mapping poisoning to an internal error.
pub(crate) fn write<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>, CoreError> {
    lock.write()
        .map_err(|_| CoreError::Internal("Store lock poisoned".to_string()))
}
