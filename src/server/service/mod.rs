//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing booking, cancellation and authentication rules
//! - **Orchestration**: Coordinating repositories, the payment gateway, email and real-time pushes
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Validation**: Turning request DTOs into validated parameters

pub mod admin;
pub mod appointment;
pub mod auth;
pub mod chat;
pub mod chatbot;
pub mod email;
pub mod legal_history;
pub mod notification;
pub mod oauth;
pub mod password;
pub mod payment;
pub mod profile;
pub mod slot;
pub mod token;
pub mod video_section;

#[cfg(test)]
mod test;
