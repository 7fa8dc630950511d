use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::VideoSectionStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "video_section")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub appointment_id: String,
    pub lawyer_id: String,
    pub client_id: String,
    pub lawyer_name: String,
    pub client_name: String,
    pub lawyer_profile: Option<String>,
    pub client_profile: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    #[sea_orm(unique)]
    pub room_id: String,
    pub status: VideoSectionStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment::Entity",
        from = "Column::AppointmentId",
        to = "super::appointment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Appointment,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
