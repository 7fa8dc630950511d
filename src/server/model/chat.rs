use chrono::{DateTime, Utc};

use crate::model::chat::{ChatDto, ChatListItemDto, ChatMessageDto, ChatMessagesDto};

#[derive(Debug, Clone)]
pub struct Chat {
    pub id: String,
    pub lawyer_id: String,
    pub client_id: String,
    pub lawyer_name: String,
    pub client_name: String,
    pub lawyer_profile: Option<String>,
    pub client_profile: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn from_entity(entity: entity::chat::Model) -> Self {
        Self {
            id: entity.id,
            lawyer_id: entity.lawyer_id,
            client_id: entity.client_id,
            lawyer_name: entity.lawyer_name,
            client_name: entity.client_name,
            lawyer_profile: entity.lawyer_profile,
            client_profile: entity.client_profile,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.lawyer_id == user_id || self.client_id == user_id
    }

    /// The participant that is not `user_id`.
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        if self.lawyer_id == user_id {
            Some(&self.client_id)
        } else if self.client_id == user_id {
            Some(&self.lawyer_id)
        } else {
            None
        }
    }

    pub fn into_dto(self) -> ChatDto {
        ChatDto {
            id: self.id,
            lawyer_id: self.lawyer_id,
            client_id: self.client_id,
            lawyer_name: self.lawyer_name,
            client_name: self.client_name,
            lawyer_profile: self.lawyer_profile,
            client_profile: self.client_profile,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: i32,
    pub chat_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub is_received: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            chat_id: entity.chat_id,
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            message: entity.message,
            is_received: entity.is_received,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            chat_id: self.chat_id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            message: self.message,
            is_received: self.is_received,
            created_at: self.created_at,
        }
    }
}

/// Chat as listed for one participant.
#[derive(Debug, Clone)]
pub struct ChatListItem {
    pub chat: Chat,
    pub not_seen_messages: u64,
}

impl ChatListItem {
    pub fn into_dto(self) -> ChatListItemDto {
        ChatListItemDto {
            chat: self.chat.into_dto(),
            not_seen_messages: self.not_seen_messages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatWithMessages {
    pub chat: Chat,
    pub messages: Vec<ChatMessage>,
}

impl ChatWithMessages {
    pub fn into_dto(self) -> ChatMessagesDto {
        ChatMessagesDto {
            chat: self.chat.into_dto(),
            messages: self
                .messages
                .into_iter()
                .map(ChatMessage::into_dto)
                .collect(),
        }
    }
}
