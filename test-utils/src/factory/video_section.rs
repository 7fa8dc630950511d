use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::VideoSectionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_hex_id;

/// Factory for video sections of an appointment.
pub struct VideoSectionFactory<'a> {
    db: &'a DatabaseConnection,
    appointment: entity::appointment::Model,
    start_time: DateTime<Utc>,
    status: VideoSectionStatus,
}

impl<'a> VideoSectionFactory<'a> {
    /// Defaults to a pending section starting one day from now.
    pub fn new(db: &'a DatabaseConnection, appointment: &entity::appointment::Model) -> Self {
        Self {
            db,
            appointment: appointment.clone(),
            start_time: Utc::now() + Duration::days(1),
            status: VideoSectionStatus::Pending,
        }
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn status(mut self, status: VideoSectionStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::video_section::Model, DbErr> {
        entity::video_section::ActiveModel {
            id: ActiveValue::Set(next_hex_id()),
            appointment_id: ActiveValue::Set(self.appointment.id),
            lawyer_id: ActiveValue::Set(self.appointment.lawyer_id),
            client_id: ActiveValue::Set(self.appointment.client_id),
            lawyer_name: ActiveValue::Set("Lawyer".to_string()),
            client_name: ActiveValue::Set("Client".to_string()),
            lawyer_profile: ActiveValue::Set(None),
            client_profile: ActiveValue::Set(None),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + Duration::minutes(60)),
            room_id: ActiveValue::Set(format!("room-{}", next_hex_id())),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending section starting one day from now.
pub async fn create_video_section(
    db: &DatabaseConnection,
    appointment: &entity::appointment::Model,
) -> Result<entity::video_section::Model, DbErr> {
    VideoSectionFactory::new(db, appointment).build().await
}
