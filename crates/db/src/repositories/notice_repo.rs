use chrono::NaiveDate;

use hms_core::error::CoreError;
use hms_core::notice::{
    validate_posting, Announcement, AnnouncementStatus, Notice, NoticeStatus,
};

use crate::models::notice::{NewAnnouncement, NewNotice};
use crate::store::{self, MemDb};

/// Read and mutation access to notices.
pub struct NoticeRepo;

impl NoticeRepo {
    /// All notices in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<Notice>, CoreError> {
        Ok(store::read(&db.notices)?.clone())
    }

    /// Notices currently active.
    pub fn list_active(db: &MemDb) -> Result<Vec<Notice>, CoreError> {
        Ok(store::read(&db.notices)?
            .iter()
            .filter(|n| n.status == NoticeStatus::Active)
            .cloned()
            .collect())
    }

    /// Pin a new notice, active immediately.
    pub fn create(db: &MemDb, input: &NewNotice, today: NaiveDate) -> Result<Notice, CoreError> {
        validate_posting(&input.title, &input.content, today, input.expires_at)?;
        let notice = Notice {
            id: db.next_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            created_by: input.created_by.clone(),
            status: NoticeStatus::Active,
            created_at: today,
            expires_at: input.expires_at,
        };
        store::write(&db.notices)?.push(notice.clone());
        Ok(notice)
    }
}

/// Read and mutation access to announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// All announcements in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<Announcement>, CoreError> {
        Ok(store::read(&db.announcements)?.clone())
    }

    /// Publish a new announcement.
    pub fn create(
        db: &MemDb,
        input: &NewAnnouncement,
        today: NaiveDate,
    ) -> Result<Announcement, CoreError> {
        validate_posting(&input.title, &input.content, today, input.expires_at)?;
        let announcement = Announcement {
            id: db.next_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            category: input.category,
            priority: input.priority,
            published_at: today,
            expires_at: input.expires_at,
            status: AnnouncementStatus::Published,
        };
        store::write(&db.announcements)?.push(announcement.clone());
        Ok(announcement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hms_core::complaint::Priority;
    use hms_core::notice::AnnouncementCategory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    #[test]
    fn created_notice_is_active() {
        let db = MemDb::seeded();
        let notice = NoticeRepo::create(
            &db,
            &NewNotice {
                title: "Water outage".to_string(),
                content: "Supply down Tuesday morning".to_string(),
                created_by: "Priya Sharma".to_string(),
                expires_at: None,
            },
            today(),
        )
        .unwrap();
        assert_eq!(notice.status, NoticeStatus::Active);
        assert_eq!(NoticeRepo::list(&db).unwrap().len(), 3);
    }

    #[test]
    fn expiry_before_today_rejected() {
        let db = MemDb::seeded();
        let result = NoticeRepo::create(
            &db,
            &NewNotice {
                title: "Stale".to_string(),
                content: "x".to_string(),
                created_by: "Priya Sharma".to_string(),
                expires_at: NaiveDate::from_ymd_opt(2024, 11, 1),
            },
            today(),
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn created_announcement_is_published() {
        let db = MemDb::seeded();
        let announcement = AnnouncementRepo::create(
            &db,
            &NewAnnouncement {
                title: "Mess menu change".to_string(),
                content: "New menu from Monday".to_string(),
                category: AnnouncementCategory::General,
                priority: Priority::Low,
                expires_at: None,
            },
            today(),
        )
        .unwrap();
        assert_eq!(announcement.status, AnnouncementStatus::Published);
        assert_eq!(announcement.published_at, today());
    }
}
