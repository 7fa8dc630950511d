use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::video_section::VideoSectionRepository,
    error::AppError,
    model::{appointment::Viewer, video_section::VideoSection},
    util::validate,
};

const UPCOMING_LIMIT: u64 = 10;
const NEXT_DAYS: i64 = 2;

pub struct VideoSectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoSectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a section to one of its participants.
    pub async fn get(&self, section_id: &str, viewer: Viewer<'_>) -> Result<VideoSection, AppError> {
        validate::id(section_id)?;

        VideoSectionRepository::new(self.db)
            .find_by_id(section_id)
            .await?
            .filter(|s| viewer.may_view(&s.lawyer_id, &s.client_id))
            .ok_or_else(|| AppError::NotFound("Video section not found".to_string()))
    }

    /// Pending sessions of the lawyer that have not started yet, earliest first.
    pub async fn upcoming_for_lawyer(&self, lawyer_id: &str) -> Result<Vec<VideoSection>, AppError> {
        Ok(VideoSectionRepository::new(self.db)
            .get_upcoming_for_lawyer(lawyer_id, Utc::now(), UPCOMING_LIMIT)
            .await?)
    }

    pub async fn next_two_days_for_lawyer(
        &self,
        lawyer_id: &str,
    ) -> Result<Vec<VideoSection>, AppError> {
        self.next_two_days(entity::video_section::Column::LawyerId, lawyer_id, Utc::now())
            .await
    }

    pub async fn next_two_days_for_client(
        &self,
        client_id: &str,
    ) -> Result<Vec<VideoSection>, AppError> {
        self.next_two_days(entity::video_section::Column::ClientId, client_id, Utc::now())
            .await
    }

    /// Confirmed sessions of a participant starting within two days of `now`.
    pub async fn next_two_days(
        &self,
        participant: entity::video_section::Column,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<VideoSection>, AppError> {
        Ok(VideoSectionRepository::new(self.db)
            .get_confirmed_between(
                Some((participant, user_id)),
                now,
                now + Duration::days(NEXT_DAYS),
            )
            .await?)
    }
}
