pub use super::admin::Entity as Admin;
pub use super::appointment::Entity as Appointment;
pub use super::chat::Entity as Chat;
pub use super::chat_bot_message::Entity as ChatBotMessage;
pub use super::client::Entity as Client;
pub use super::lawyer::Entity as Lawyer;
pub use super::legal_history::Entity as LegalHistory;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::otp::Entity as Otp;
pub use super::payment::Entity as Payment;
pub use super::slot::Entity as Slot;
pub use super::video_section::Entity as VideoSection;
