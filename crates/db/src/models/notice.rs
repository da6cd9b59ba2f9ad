use chrono::NaiveDate;
use serde::Deserialize;

use hms_core::complaint::Priority;
use hms_core::notice::AnnouncementCategory;

/// DTO for pinning a notice.
#[derive(Debug, Deserialize)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub expires_at: Option<NaiveDate>,
}

/// DTO for publishing an announcement.
#[derive(Debug, Deserialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub category: AnnouncementCategory,
    pub priority: Priority,
    pub expires_at: Option<NaiveDate>,
}
