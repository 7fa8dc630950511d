//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary
//! (`from_entity`) and controllers convert them into API DTOs (`into_dto`).
//! Parameter types validate incoming DTOs once (`from_dto`) so services can
//! rely on well-formed input.

pub mod account;
pub mod appointment;
pub mod chat;
pub mod chatbot;
pub mod client;
pub mod lawyer;
pub mod legal_history;
pub mod notification;
pub mod pagination;
pub mod payment;
pub mod slot;
pub mod video_section;
