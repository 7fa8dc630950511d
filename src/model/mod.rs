//! Request and response bodies of the HTTP API.

pub mod api;
pub mod appointment;
pub mod auth;
pub mod chat;
pub mod chatbot;
pub mod client;
pub mod lawyer;
pub mod legal_history;
pub mod notification;
pub mod slot;
pub mod video;
