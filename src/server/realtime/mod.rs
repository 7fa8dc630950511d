//! Per-user event channels pushed to connected WebSocket clients.

pub mod socket;

use std::{collections::HashMap, sync::Arc};

use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

use crate::model::{
    chat::{ChatDto, ChatMessageDto},
    notification::NotificationDto,
};

const CHANNEL_CAPACITY: usize = 64;

/// Event delivered to a connected user, serialized as JSON tagged by `event`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ServerEvent {
    NewChat {
        chat: ChatDto,
    },
    NewMessage {
        message: ChatMessageDto,
    },
    /// The receiver read every message of the chat.
    #[serde(rename_all = "camelCase")]
    MessagesReceived {
        chat_id: String,
        receiver_id: String,
    },
    Notification {
        notification: NotificationDto,
    },
    NotificationCleared {
        ids: Vec<String>,
    },
}

#[derive(Clone, Default)]
pub struct RealtimeHub {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<ServerEvent>>>>,
}

impl RealtimeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `event` to every open connection of `user_id`.
    ///
    /// Events for users without a connection are dropped.
    pub async fn publish(&self, user_id: &str, event: ServerEvent) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(user_id) {
            // Fails only when every receiver is gone.
            let _ = tx.send(event);
        }
    }

    pub async fn subscribe(&self, user_id: &str) -> broadcast::Receiver<ServerEvent> {
        {
            let channels = self.channels.read().await;
            if let Some(tx) = channels.get(user_id) {
                return tx.subscribe();
            }
        }

        let mut channels = self.channels.write().await;
        channels
            .entry(user_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Drops the channel of `user_id` once no connection listens on it.
    pub async fn release(&self, user_id: &str) {
        let mut channels = self.channels.write().await;
        if channels
            .get(user_id)
            .is_some_and(|tx| tx.receiver_count() == 0)
        {
            channels.remove(user_id);
        }
    }

    #[cfg(test)]
    pub async fn connected_users(&self) -> usize {
        self.channels.read().await.len()
    }
}
