//! Demo data set loaded into a seeded store.
//!
//! Mirrors the mock database the dashboards were designed against: a
//! handful of students across four rooms, fees in every payment state,
//! and complaints at each workflow stage.

use chrono::{NaiveDate, TimeZone, Utc};

use hms_core::allocation::{AllocationStatus, RoomAllocation};
use hms_core::complaint::{Complaint, ComplaintCategory, ComplaintStatus, Priority};
use hms_core::fee::{Fee, FeeStatus, FeeType};
use hms_core::notice::{
    Announcement, AnnouncementCategory, AnnouncementStatus, Notice, NoticeStatus,
};
use hms_core::room::{Room, RoomStatus, RoomType};
use hms_core::student::{Student, StudentStatus};
use hms_core::types::Timestamp;
use hms_core::user::{Role, User};

use crate::store::MemDb;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn ts(y: i32, m: u32, d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

/// Load the full demo data set into `db`.
pub fn load(db: &MemDb) {
    let mut users = db.users.write().expect("fresh store");
    users.extend([
        User {
            id: 1,
            username: "student1".to_string(),
            email: "student1@hostel.edu".to_string(),
            role: Role::Student,
            first_name: "Raj".to_string(),
            last_name: "Kumar".to_string(),
            phone: "+91-9876543210".to_string(),
        },
        User {
            id: 2,
            username: "warden1".to_string(),
            email: "warden1@hostel.edu".to_string(),
            role: Role::Warden,
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            phone: "+91-9123456789".to_string(),
        },
        User {
            id: 3,
            username: "admin1".to_string(),
            email: "admin1@hostel.edu".to_string(),
            role: Role::Admin,
            first_name: "Vikram".to_string(),
            last_name: "Singh".to_string(),
            phone: "+91-9000000001".to_string(),
        },
    ]);
    drop(users);

    let mut students = db.students.write().expect("fresh store");
    students.extend([
        Student {
            id: 1,
            user_id: 1,
            name: "Raj Kumar".to_string(),
            enrollment_number: "EN001".to_string(),
            department: "Computer Science".to_string(),
            semester: 4,
            status: StudentStatus::Active,
            email: "student1@hostel.edu".to_string(),
            phone: "+91-9876543210".to_string(),
            room_id: Some(1),
            check_in_date: date(2024, 1, 15),
            check_out_date: None,
        },
        Student {
            id: 2,
            user_id: 4,
            name: "Priya Gupta".to_string(),
            enrollment_number: "EN002".to_string(),
            department: "Electronics".to_string(),
            semester: 3,
            status: StudentStatus::Active,
            email: "priya@hostel.edu".to_string(),
            phone: "+91-8765432109".to_string(),
            room_id: Some(2),
            check_in_date: date(2024, 2, 10),
            check_out_date: None,
        },
        Student {
            id: 3,
            user_id: 5,
            name: "Arjun Patel".to_string(),
            enrollment_number: "EN003".to_string(),
            department: "Mechanical".to_string(),
            semester: 2,
            status: StudentStatus::Active,
            email: "arjun@hostel.edu".to_string(),
            phone: "+91-7654321098".to_string(),
            room_id: Some(1),
            check_in_date: date(2024, 1, 20),
            check_out_date: None,
        },
    ]);
    drop(students);

    let mut rooms = db.rooms.write().expect("fresh store");
    rooms.extend([
        Room {
            id: 1,
            room_number: "A-101".to_string(),
            capacity: 2,
            floor: 1,
            room_type: RoomType::Double,
            status: RoomStatus::Occupied,
            occupants: vec!["Raj Kumar".to_string(), "Arjun Patel".to_string()],
            maintenance_notes: None,
        },
        Room {
            id: 2,
            room_number: "A-102".to_string(),
            capacity: 1,
            floor: 1,
            room_type: RoomType::Single,
            status: RoomStatus::Occupied,
            occupants: vec!["Priya Gupta".to_string()],
            maintenance_notes: None,
        },
        Room {
            id: 3,
            room_number: "A-103".to_string(),
            capacity: 4,
            floor: 1,
            room_type: RoomType::Quad,
            status: RoomStatus::Available,
            occupants: Vec::new(),
            maintenance_notes: None,
        },
        Room {
            id: 4,
            room_number: "B-201".to_string(),
            capacity: 2,
            floor: 2,
            room_type: RoomType::Double,
            status: RoomStatus::Maintenance,
            occupants: Vec::new(),
            maintenance_notes: Some("Ceiling repair ongoing".to_string()),
        },
    ]);
    drop(rooms);

    let mut allocations = db.allocations.write().expect("fresh store");
    allocations.extend([
        RoomAllocation {
            id: 1,
            student_id: 1,
            student_name: "Raj Kumar".to_string(),
            room_id: 1,
            room_number: "A-101".to_string(),
            allocation_date: date(2024, 1, 15),
            release_date: None,
            status: AllocationStatus::Active,
        },
        RoomAllocation {
            id: 2,
            student_id: 2,
            student_name: "Priya Gupta".to_string(),
            room_id: 2,
            room_number: "A-102".to_string(),
            allocation_date: date(2024, 2, 10),
            release_date: None,
            status: AllocationStatus::Active,
        },
    ]);
    drop(allocations);

    let mut fees = db.fees.write().expect("fresh store");
    fees.extend([
        Fee {
            id: 1,
            student_id: 1,
            student_name: "Raj Kumar".to_string(),
            fee_type: FeeType::RoomCharge,
            amount: 15000,
            due_date: date(2024, 11, 30),
            payment_date: Some(date(2024, 11, 25)),
            status: FeeStatus::Paid,
            remarks: String::new(),
        },
        Fee {
            id: 2,
            student_id: 1,
            student_name: "Raj Kumar".to_string(),
            fee_type: FeeType::Maintenance,
            amount: 2000,
            due_date: date(2024, 12, 31),
            payment_date: None,
            status: FeeStatus::Pending,
            remarks: String::new(),
        },
        Fee {
            id: 3,
            student_id: 2,
            student_name: "Priya Gupta".to_string(),
            fee_type: FeeType::RoomCharge,
            amount: 15000,
            due_date: date(2024, 11, 15),
            payment_date: None,
            status: FeeStatus::Overdue,
            remarks: "Payment pending".to_string(),
        },
    ]);
    drop(fees);

    let mut complaints = db.complaints.write().expect("fresh store");
    complaints.extend([
        Complaint {
            id: 1,
            student_id: 1,
            student_name: "Raj Kumar".to_string(),
            room_id: 1,
            room_number: "A-101".to_string(),
            category: ComplaintCategory::Water,
            description: "Water leakage from ceiling".to_string(),
            status: ComplaintStatus::InProgress,
            priority: Priority::High,
            created_at: ts(2024, 11, 20),
            resolved_at: None,
        },
        Complaint {
            id: 2,
            student_id: 2,
            student_name: "Priya Gupta".to_string(),
            room_id: 2,
            room_number: "A-102".to_string(),
            category: ComplaintCategory::Electricity,
            description: "Frequent power cuts in the room".to_string(),
            status: ComplaintStatus::Open,
            priority: Priority::Medium,
            created_at: ts(2024, 11, 22),
            resolved_at: None,
        },
        Complaint {
            id: 3,
            student_id: 3,
            student_name: "Arjun Patel".to_string(),
            room_id: 1,
            room_number: "A-101".to_string(),
            category: ComplaintCategory::Noise,
            description: "Excessive noise from adjacent rooms late at night".to_string(),
            status: ComplaintStatus::Resolved,
            priority: Priority::Low,
            created_at: ts(2024, 11, 18),
            resolved_at: Some(ts(2024, 11, 20)),
        },
    ]);
    drop(complaints);

    let mut notices = db.notices.write().expect("fresh store");
    notices.extend([
        Notice {
            id: 1,
            title: "Hostel Maintenance Schedule".to_string(),
            content: "General maintenance will be carried out on weekends starting from \
                      November 25, 2024. Please cooperate with the maintenance team."
                .to_string(),
            created_by: "Priya Sharma".to_string(),
            status: NoticeStatus::Active,
            created_at: date(2024, 11, 15),
            expires_at: Some(date(2024, 12, 15)),
        },
        Notice {
            id: 2,
            title: "Fee Payment Deadline".to_string(),
            content: "All outstanding fees must be paid by December 31, 2024. Late payment \
                      will attract 10% penalty."
                .to_string(),
            created_by: "Vikram Singh".to_string(),
            status: NoticeStatus::Active,
            created_at: date(2024, 11, 1),
            expires_at: Some(date(2024, 12, 31)),
        },
    ]);
    drop(notices);

    let mut announcements = db.announcements.write().expect("fresh store");
    announcements.extend([
        Announcement {
            id: 1,
            title: "Annual Sports Event".to_string(),
            content: "Annual inter-hostel sports event scheduled for December 5-7, 2024. \
                      All interested students should register."
                .to_string(),
            category: AnnouncementCategory::Event,
            priority: Priority::Medium,
            published_at: date(2024, 11, 10),
            expires_at: Some(date(2024, 12, 8)),
            status: AnnouncementStatus::Published,
        },
        Announcement {
            id: 2,
            title: "Emergency Evacuation Drill".to_string(),
            content: "Emergency evacuation drill will be conducted on November 25, 2024 at \
                      10:00 AM. All residents must participate."
                .to_string(),
            category: AnnouncementCategory::Emergency,
            priority: Priority::High,
            published_at: date(2024, 11, 18),
            expires_at: Some(date(2024, 11, 26)),
            status: AnnouncementStatus::Published,
        },
    ]);
    drop(announcements);

    tracing::debug!("Seed data loaded");
}
