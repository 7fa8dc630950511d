pub mod prelude;

pub mod admin;
pub mod appointment;
pub mod chat;
pub mod chat_bot_message;
pub mod client;
pub mod lawyer;
pub mod legal_history;
pub mod message;
pub mod notification;
pub mod otp;
pub mod payment;
pub mod sea_orm_active_enums;
pub mod slot;
pub mod video_section;
