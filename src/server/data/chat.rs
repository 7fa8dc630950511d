use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{chat::Chat, client::Client, lawyer::Lawyer},
    util::id::new_id,
};

pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a chat between the lawyer and client, copying their display data.
    pub async fn create(&self, lawyer: &Lawyer, client: &Client) -> Result<Chat, DbErr> {
        let now = Utc::now();
        let entity = entity::chat::ActiveModel {
            id: ActiveValue::Set(new_id()),
            lawyer_id: ActiveValue::Set(lawyer.id.clone()),
            client_id: ActiveValue::Set(client.id.clone()),
            lawyer_name: ActiveValue::Set(lawyer.name.clone()),
            client_name: ActiveValue::Set(client.name.clone()),
            lawyer_profile: ActiveValue::Set(lawyer.profile_image.clone()),
            client_profile: ActiveValue::Set(client.profile_image.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Chat::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Chat>, DbErr> {
        let entity = entity::prelude::Chat::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Chat::from_entity))
    }

    pub async fn find_by_participants(
        &self,
        lawyer_id: &str,
        client_id: &str,
    ) -> Result<Option<Chat>, DbErr> {
        let entity = entity::prelude::Chat::find()
            .filter(entity::chat::Column::LawyerId.eq(lawyer_id))
            .filter(entity::chat::Column::ClientId.eq(client_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Chat::from_entity))
    }

    /// Chats the user takes part in, most recently updated first.
    pub async fn get_for_participant(
        &self,
        column: entity::chat::Column,
        user_id: &str,
    ) -> Result<Vec<Chat>, DbErr> {
        let entities = entity::prelude::Chat::find()
            .filter(column.eq(user_id))
            .order_by_desc(entity::chat::Column::UpdatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Chat::from_entity).collect())
    }

    /// Bumps `updated_at` so the chat sorts first.
    pub async fn touch(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Chat::update_many()
            .filter(entity::chat::Column::Id.eq(id))
            .col_expr(entity::chat::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
