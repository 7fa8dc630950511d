use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::VideoSectionStatus;
use sea_orm::ActiveEnum;

use crate::model::video::VideoSectionDto;

/// Scheduled video consultation room for an appointment.
#[derive(Debug, Clone)]
pub struct VideoSection {
    pub id: String,
    pub appointment_id: String,
    pub lawyer_id: String,
    pub client_id: String,
    pub lawyer_name: String,
    pub client_name: String,
    pub lawyer_profile: Option<String>,
    pub client_profile: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub room_id: String,
    pub status: VideoSectionStatus,
}

impl VideoSection {
    pub fn from_entity(entity: entity::video_section::Model) -> Self {
        Self {
            id: entity.id,
            appointment_id: entity.appointment_id,
            lawyer_id: entity.lawyer_id,
            client_id: entity.client_id,
            lawyer_name: entity.lawyer_name,
            client_name: entity.client_name,
            lawyer_profile: entity.lawyer_profile,
            client_profile: entity.client_profile,
            start_time: entity.start_time,
            end_time: entity.end_time,
            room_id: entity.room_id,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> VideoSectionDto {
        VideoSectionDto {
            id: self.id,
            appointment_id: self.appointment_id,
            lawyer_id: self.lawyer_id,
            client_id: self.client_id,
            lawyer_name: self.lawyer_name,
            client_name: self.client_name,
            lawyer_profile: self.lawyer_profile,
            client_profile: self.client_profile,
            start_time: self.start_time,
            end_time: self.end_time,
            room_id: self.room_id,
            status: self.status.to_value(),
        }
    }
}
