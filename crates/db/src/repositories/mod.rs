//! Per-entity repository structs.
//!
//! Reads return insertion-ordered snapshots; mutations validate through
//! the domain layer, assign ids from the store sequence, and return the
//! resulting record.

mod allocation_repo;
mod attendance_repo;
mod automation_repo;
mod complaint_repo;
mod fee_repo;
mod notice_repo;
mod room_repo;
mod student_repo;
mod user_repo;
mod visitor_repo;

pub use allocation_repo::AllocationRepo;
pub use attendance_repo::AttendanceRepo;
pub use automation_repo::AutomationRepo;
pub use complaint_repo::ComplaintRepo;
pub use fee_repo::FeeRepo;
pub use notice_repo::{AnnouncementRepo, NoticeRepo};
pub use room_repo::RoomRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
pub use visitor_repo::VisitorRepo;
