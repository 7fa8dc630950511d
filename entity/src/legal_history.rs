use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "legal_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub client_id: String,
    pub lawyer_id: String,
    pub title: String,
    pub case_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: Date,
    pub status: String,
    /// JSON array of document URLs.
    pub documents: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::lawyer::Entity",
        from = "Column::LawyerId",
        to = "super::lawyer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lawyer,
}

impl ActiveModelBehavior for ActiveModel {}
