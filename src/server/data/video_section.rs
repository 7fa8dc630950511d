//! Video section data repository.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AppointmentStatus, VideoSectionStatus};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::video_section::VideoSection;

pub struct VideoSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<VideoSection>, DbErr> {
        let entity = entity::prelude::VideoSection::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(VideoSection::from_entity))
    }

    pub async fn find_by_room_id(&self, room_id: &str) -> Result<Option<VideoSection>, DbErr> {
        let entity = entity::prelude::VideoSection::find()
            .filter(entity::video_section::Column::RoomId.eq(room_id))
            .one(self.db)
            .await?;

        Ok(entity.map(VideoSection::from_entity))
    }

    pub async fn find_by_appointment_id(
        &self,
        appointment_id: &str,
    ) -> Result<Option<VideoSection>, DbErr> {
        let entity = entity::prelude::VideoSection::find()
            .filter(entity::video_section::Column::AppointmentId.eq(appointment_id))
            .one(self.db)
            .await?;

        Ok(entity.map(VideoSection::from_entity))
    }

    pub async fn set_status_by_appointment(
        &self,
        appointment_id: &str,
        status: VideoSectionStatus,
    ) -> Result<(), DbErr> {
        entity::prelude::VideoSection::update_many()
            .filter(entity::video_section::Column::AppointmentId.eq(appointment_id))
            .col_expr(entity::video_section::Column::Status, Expr::value(status))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Pending sections of a lawyer starting at or after `now`, earliest first.
    pub async fn get_upcoming_for_lawyer(
        &self,
        lawyer_id: &str,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<VideoSection>, DbErr> {
        let entities = entity::prelude::VideoSection::find()
            .filter(entity::video_section::Column::LawyerId.eq(lawyer_id))
            .filter(entity::video_section::Column::Status.eq(VideoSectionStatus::Pending))
            .filter(entity::video_section::Column::StartTime.gte(now))
            .order_by_asc(entity::video_section::Column::StartTime)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VideoSection::from_entity).collect())
    }

    /// Sections of confirmed appointments starting within `[from, to]`, earliest first.
    ///
    /// # Arguments
    /// - `participant` - Column and id to restrict to, or `None` for every section
    /// - `from` - Window start, inclusive
    /// - `to` - Window end, inclusive
    ///
    /// # Returns
    /// - `Ok(Vec<VideoSection>)` - Matching sections
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_confirmed_between(
        &self,
        participant: Option<(entity::video_section::Column, &str)>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<VideoSection>, DbErr> {
        let mut query = entity::prelude::VideoSection::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::video_section::Relation::Appointment.def(),
            )
            .filter(entity::appointment::Column::Status.eq(AppointmentStatus::Confirmed))
            .filter(entity::video_section::Column::StartTime.gte(from))
            .filter(entity::video_section::Column::StartTime.lte(to));

        if let Some((column, id)) = participant {
            query = query.filter(column.eq(id));
        }

        let entities = query
            .order_by_asc(entity::video_section::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VideoSection::from_entity).collect())
    }

    /// Marks the section held in `room_id` completed.
    pub async fn complete(&self, room_id: &str) -> Result<(), DbErr> {
        entity::prelude::VideoSection::update_many()
            .filter(entity::video_section::Column::RoomId.eq(room_id))
            .col_expr(
                entity::video_section::Column::Status,
                Expr::value(VideoSectionStatus::Completed),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
