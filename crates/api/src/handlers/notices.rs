//! Handlers for the `/notices` and `/announcements` resources.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hms_db::models::notice::{NewAnnouncement, NewNotice};
use hms_db::repositories::{AnnouncementRepo, NoticeRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notices
pub async fn list_notices(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notices = NoticeRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: notices }))
}

/// POST /api/v1/notices
pub async fn create_notice(
    State(state): State<AppState>,
    Json(input): Json<NewNotice>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let notice = NoticeRepo::create(&state.db, &input, today)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: notice })))
}

/// GET /api/v1/announcements
pub async fn list_announcements(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let announcements = AnnouncementRepo::list(&state.db)?;
    Ok(Json(DataResponse { data: announcements }))
}

/// POST /api/v1/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(input): Json<NewAnnouncement>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let announcement = AnnouncementRepo::create(&state.db, &input, today)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: announcement })))
}
