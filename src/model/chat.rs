use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatDto {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatListItemDto {
    pub chat: ChatDto,
    /// Messages addressed to the caller that were not marked received yet.
    pub not_seen_messages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    pub chat_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub is_received: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessagesDto {
    pub chat: ChatDto,
    pub messages: Vec<ChatMessageDto>,
}

/// Opens a chat; the caller's own id fills the side matching their role.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateChatDto {
    pub lawyer_id: Option<String>,
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateChatMessageDto {
    pub receiver_id: Option<String>,
    pub message: Option<String>,
}
