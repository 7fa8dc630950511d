use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::chat::ChatMessage;

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        chat_id: &str,
        sender_id: &str,
        receiver_id: &str,
        message: &str,
    ) -> Result<ChatMessage, DbErr> {
        let entity = entity::message::ActiveModel {
            chat_id: ActiveValue::Set(chat_id.to_string()),
            sender_id: ActiveValue::Set(sender_id.to_string()),
            receiver_id: ActiveValue::Set(receiver_id.to_string()),
            message: ActiveValue::Set(message.to_string()),
            is_received: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatMessage::from_entity(entity))
    }

    /// Messages of a chat, oldest first.
    pub async fn get_by_chat(&self, chat_id: &str) -> Result<Vec<ChatMessage>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ChatMessage::from_entity).collect())
    }

    /// Counts messages in the chat addressed to `receiver_id` and not yet received.
    pub async fn count_unseen(&self, chat_id: &str, receiver_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .filter(entity::message::Column::ReceiverId.eq(receiver_id))
            .filter(entity::message::Column::IsReceived.eq(false))
            .count(self.db)
            .await
    }

    /// Marks every message to `receiver_id` in the chat as received.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages that changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_received(&self, chat_id: &str, receiver_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::update_many()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .filter(entity::message::Column::ReceiverId.eq(receiver_id))
            .filter(entity::message::Column::IsReceived.eq(false))
            .col_expr(entity::message::Column::IsReceived, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
