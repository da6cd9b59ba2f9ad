//! Notices and announcements posted by staff.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::complaint::Priority;
use crate::error::CoreError;
use crate::types::DbId;

/// Publication status of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeStatus {
    Active,
    Archived,
    Draft,
}

/// Publication status of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementStatus {
    Published,
    Archived,
    Draft,
}

/// Topic of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementCategory {
    General,
    Maintenance,
    Academic,
    Event,
    Emergency,
}

/// A notice pinned to the hostel board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub status: NoticeStatus,
    pub created_at: NaiveDate,
    pub expires_at: Option<NaiveDate>,
}

/// A categorized, prioritized announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: AnnouncementCategory,
    pub priority: Priority,
    pub published_at: NaiveDate,
    pub expires_at: Option<NaiveDate>,
    pub status: AnnouncementStatus,
}

/// Title and content are required; expiry, when present, must not precede
/// the publication date.
pub fn validate_posting(
    title: &str,
    content: &str,
    published_at: NaiveDate,
    expires_at: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Content must not be empty".to_string(),
        ));
    }
    if let Some(expiry) = expires_at {
        if expiry < published_at {
            return Err(CoreError::Validation(format!(
                "Expiry {expiry} precedes publication date {published_at}"
            )));
        }
    }
    Ok(())
}
