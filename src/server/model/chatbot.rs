use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChatBotRole;
use sea_orm::ActiveEnum;

use crate::model::chatbot::ChatBotMessageDto;

#[derive(Debug, Clone)]
pub struct ChatBotMessage {
    pub id: i32,
    pub client_id: String,
    pub role: ChatBotRole,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ChatBotMessage {
    pub fn from_entity(entity: entity::chat_bot_message::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            role: entity.role,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChatBotMessageDto {
        ChatBotMessageDto {
            id: self.id,
            role: self.role.to_value(),
            message: self.message,
            created_at: self.created_at,
        }
    }
}
