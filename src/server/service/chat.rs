//! Lawyer and client chats.
//!
//! Every write is pushed to the participants through the realtime hub so open
//! chat windows update without polling.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        chat::ChatRepository, client::ClientRepository, lawyer::LawyerRepository,
        message::MessageRepository,
    },
    error::AppError,
    model::{
        account::{AuthUser, Role},
        chat::{Chat, ChatListItem, ChatMessage, ChatWithMessages},
        client::Client,
    },
    realtime::{RealtimeHub, ServerEvent},
    util::validate,
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a RealtimeHub,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a RealtimeHub) -> Self {
        Self { db, hub }
    }

    /// Opens the chat between a lawyer and a client, reusing an existing one.
    ///
    /// # Returns
    /// - `Ok(Chat)` - New or existing chat
    /// - `Err(AppError::NotFound)` - Unknown client or lawyer
    /// - `Err(AppError::BadRequest)` - Client has no name or profile image
    pub async fn create_chat(&self, lawyer_id: &str, client_id: &str) -> Result<Chat, AppError> {
        validate::ids(&[lawyer_id, client_id])?;

        let client = ClientRepository::new(self.db)
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid client id".to_string()))?;
        let lawyer = LawyerRepository::new(self.db)
            .find_by_id(lawyer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid lawyer id".to_string()))?;

        let has_profile = client.profile_image.as_deref().is_some_and(|p| !p.is_empty());
        if client.name.trim().is_empty() || !has_profile {
            return Err(AppError::BadRequest(
                "Client profile or name is missing".to_string(),
            ));
        }

        let repo = ChatRepository::new(self.db);
        if let Some(chat) = repo.find_by_participants(lawyer_id, client_id).await? {
            return Ok(chat);
        }

        let chat = repo.create(&lawyer, &client).await?;

        for user_id in [&chat.lawyer_id, &chat.client_id] {
            self.hub
                .publish(
                    user_id,
                    ServerEvent::NewChat {
                        chat: chat.clone().into_dto(),
                    },
                )
                .await;
        }

        Ok(chat)
    }

    /// Stores a message from one participant to the other and pushes it to both.
    ///
    /// # Returns
    /// - `Ok(ChatMessage)` - Stored message
    /// - `Err(AppError::NotFound)` - Unknown chat
    /// - `Err(AppError::Forbidden)` - Sender or receiver is not a participant
    /// - `Err(AppError::BadRequest)` - Empty or overlong message
    pub async fn create_message(
        &self,
        chat_id: &str,
        sender_id: &str,
        receiver_id: &str,
        message: &str,
    ) -> Result<ChatMessage, AppError> {
        validate::ids(&[chat_id, receiver_id])?;
        let message = message.trim();
        validate::length("message", message, 1, 2000)?;

        let chats = ChatRepository::new(self.db);
        let chat = chats
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))?;

        if chat.other_participant(sender_id) != Some(receiver_id) {
            return Err(AppError::Forbidden("Unauthorized".to_string()));
        }

        let created = MessageRepository::new(self.db)
            .create(chat_id, sender_id, receiver_id, message)
            .await?;
        chats.touch(chat_id).await?;

        for user_id in [sender_id, receiver_id] {
            self.hub
                .publish(
                    user_id,
                    ServerEvent::NewMessage {
                        message: created.clone().into_dto(),
                    },
                )
                .await;
        }

        Ok(created)
    }

    /// Chats of the user, most recently active first, with unread counts.
    pub async fn chats_for(&self, user: &AuthUser) -> Result<Vec<ChatListItem>, AppError> {
        let column = match user.role {
            Role::Lawyer => entity::chat::Column::LawyerId,
            Role::Client => entity::chat::Column::ClientId,
            Role::Admin => {
                return Err(AppError::Forbidden("Unauthorized".to_string()));
            }
        };

        let chats = ChatRepository::new(self.db)
            .get_for_participant(column, &user.id)
            .await?;

        let messages = MessageRepository::new(self.db);
        let mut items = Vec::with_capacity(chats.len());
        for chat in chats {
            let not_seen_messages = messages.count_unseen(&chat.id, &user.id).await?;
            items.push(ChatListItem {
                chat,
                not_seen_messages,
            });
        }

        Ok(items)
    }

    /// Chat with its messages, oldest first.
    pub async fn messages(&self, chat_id: &str, viewer_id: &str) -> Result<ChatWithMessages, AppError> {
        let chat = self.participant_chat(chat_id, viewer_id).await?;
        let messages = MessageRepository::new(self.db).get_by_chat(&chat.id).await?;

        Ok(ChatWithMessages { chat, messages })
    }

    /// Marks every message addressed to `receiver_id` as received.
    ///
    /// The other participant is told so their read receipts update.
    pub async fn mark_received(&self, chat_id: &str, receiver_id: &str) -> Result<u64, AppError> {
        let chat = self.participant_chat(chat_id, receiver_id).await?;

        let updated = MessageRepository::new(self.db)
            .mark_received(&chat.id, receiver_id)
            .await?;

        if let Some(other) = chat.other_participant(receiver_id) {
            self.hub
                .publish(
                    other,
                    ServerEvent::MessagesReceived {
                        chat_id: chat.id.clone(),
                        receiver_id: receiver_id.to_string(),
                    },
                )
                .await;
        }

        Ok(updated)
    }

    pub async fn is_participant(&self, chat_id: &str, user_id: &str) -> Result<bool, AppError> {
        let chat = ChatRepository::new(self.db).find_by_id(chat_id).await?;

        Ok(chat.is_some_and(|c| c.has_participant(user_id)))
    }

    /// Clients a lawyer can start a chat with.
    pub async fn clients_for_lawyer(&self) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db).get_chat_ready().await?)
    }

    async fn participant_chat(&self, chat_id: &str, user_id: &str) -> Result<Chat, AppError> {
        validate::id(chat_id)?;

        let chat = ChatRepository::new(self.db)
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))?;

        if !chat.has_participant(user_id) {
            return Err(AppError::Forbidden("Unauthorized".to_string()));
        }

        Ok(chat)
    }
}
