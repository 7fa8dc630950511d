use crate::server::data::chat_bot_message::ChatBotMessageRepository;
use entity::sea_orm_active_enums::ChatBotRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_latest;
