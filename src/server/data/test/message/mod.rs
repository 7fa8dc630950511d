use crate::server::data::{chat::ChatRepository, message::MessageRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_received;
mod touch_chat;
