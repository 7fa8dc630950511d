//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod account;
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
pub mod slot;
pub mod video_section;

#[cfg(test)]
mod test;
