use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lawyer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    /// JSON array of qualification strings.
    pub qualifications: Json,
    pub specialization: Option<String>,
    pub experience: Option<i32>,
    pub bar_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub office_address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_blocked: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
