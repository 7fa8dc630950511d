use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Day, SlotStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "slot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub lawyer_id: String,
    pub day: Day,
    /// Twelve-hour clock, e.g. `09:30 AM`.
    pub start_time: String,
    pub end_time: String,
    pub status: SlotStatus,
    pub created_at: DateTimeUtc,
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
}

impl Related<super::lawyer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lawyer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
