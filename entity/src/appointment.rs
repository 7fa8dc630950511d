use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AppointmentStatus, AppointmentType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub lawyer_id: String,
    pub client_id: String,
    /// Not a foreign key: slots may be deleted while their appointments remain.
    pub slot_id: String,
    pub appointment_type: AppointmentType,
    pub appointment_date: Date,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub payment_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lawyer::Entity",
        from = "Column::LawyerId",
        to = "super::lawyer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lawyer,
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Client,
}

impl Related<super::lawyer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lawyer.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
