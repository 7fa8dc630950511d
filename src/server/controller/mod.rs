//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, hand request bodies to the
//! services and convert the returned domain models into DTOs.

pub mod admin;
pub mod admin_auth;
pub mod appointment;
pub mod chat;
pub mod chatbot;
pub mod client;
pub mod client_auth;
pub mod lawyer;
pub mod lawyer_auth;
pub mod notification;
pub mod slot;
pub mod video;

use axum::Json;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::auth::{AccessTokenDto, LoginSuccessDto, OtpSentDto},
    server::{
        error::AppError,
        middleware::session::RefreshSession,
        model::account::{AuthSuccess, OtpSent},
    },
};

const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

impl PaginationParams {
    /// Entries per page limited to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

/// Keeps the refresh token in the session and returns the access token.
async fn signed_in(
    session: &Session,
    success: AuthSuccess,
) -> Result<Json<LoginSuccessDto>, AppError> {
    RefreshSession::new(session, success.role)
        .set_token(&success.tokens.refresh_token)
        .await?;

    Ok(Json(LoginSuccessDto {
        message: "Login successful".to_string(),
        access_token: success.tokens.access_token,
        user_id: success.user_id,
        role: success.role.to_string(),
    }))
}

/// Rotates the session's refresh token and returns the new access token.
async fn refreshed(
    session: &Session,
    success: AuthSuccess,
) -> Result<Json<AccessTokenDto>, AppError> {
    RefreshSession::new(session, success.role)
        .set_token(&success.tokens.refresh_token)
        .await?;

    Ok(Json(AccessTokenDto {
        access_token: success.tokens.access_token,
    }))
}

fn otp_sent(sent: OtpSent) -> Json<OtpSentDto> {
    Json(OtpSentDto {
        message: OtpSent::MESSAGE.to_string(),
        email: sent.email,
    })
}
