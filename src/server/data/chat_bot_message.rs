use chrono::Utc;
use entity::sea_orm_active_enums::ChatBotRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::chatbot::ChatBotMessage;

pub struct ChatBotMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatBotMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        client_id: &str,
        role: ChatBotRole,
        message: &str,
    ) -> Result<ChatBotMessage, DbErr> {
        let entity = entity::chat_bot_message::ActiveModel {
            client_id: ActiveValue::Set(client_id.to_string()),
            role: ActiveValue::Set(role),
            message: ActiveValue::Set(message.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatBotMessage::from_entity(entity))
    }

    /// The client's latest `limit` messages, returned oldest first.
    pub async fn get_latest(
        &self,
        client_id: &str,
        limit: u64,
    ) -> Result<Vec<ChatBotMessage>, DbErr> {
        let entities = entity::prelude::ChatBotMessage::find()
            .filter(entity::chat_bot_message::Column::ClientId.eq(client_id))
            .order_by_desc(entity::chat_bot_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .rev()
            .map(ChatBotMessage::from_entity)
            .collect())
    }

    /// Deletes the client's messages older than the one with id `oldest_kept`.
    pub async fn delete_before(&self, client_id: &str, oldest_kept: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatBotMessage::delete_many()
            .filter(entity::chat_bot_message::Column::ClientId.eq(client_id))
            .filter(entity::chat_bot_message::Column::Id.lt(oldest_kept))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
