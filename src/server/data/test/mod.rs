mod admin;
mod appointment;
mod chat_bot_message;
mod client;
mod lawyer;
mod legal_history;
mod message;
mod notification;
mod otp;
mod slot;
mod video_section;
