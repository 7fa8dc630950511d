//! Outgoing email.
//!
//! Messages are plain text built by the helper functions below. Delivery goes
//! through an `EmailSender` so the transactional email API can be swapped for
//! the logging sender in development and for fakes in tests.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::{
    config::EmailApiConfig, error::AppError, model::account::OtpPurpose,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub name: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError>;
}

/// Builds the mail carrying a one-time code.
pub fn otp_message(
    to: &str,
    name: &str,
    code: &str,
    purpose: OtpPurpose,
    expiry_minutes: i64,
) -> EmailMessage {
    let (subject, intro) = match purpose {
        OtpPurpose::Register => ("Email Verification", "Welcome! Use this code to verify your email address."),
        OtpPurpose::Login | OtpPurpose::Verification => {
            ("OTP Verification", "Use this code to complete your sign in.")
        }
        OtpPurpose::PasswordReset => ("Password Reset", "Use this code to reset your password."),
    };

    EmailMessage {
        to: to.to_string(),
        name: name.to_string(),
        subject: format!("No Reply Mail: {}", subject),
        body: format!(
            "Hello {},\n\n{}\n\nYour code: {}\n\nThe code expires in {} minutes. If you did not request it, ignore this email.",
            name, intro, code, expiry_minutes
        ),
    }
}

/// Builds the password reset mail linking to the frontend reset page.
pub fn password_reset_message(to: &str, name: &str, link: &str, code: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        name: name.to_string(),
        subject: "No Reply Mail: Password Reset".to_string(),
        body: format!(
            "Hello {},\n\nOpen {} and enter the code {} to choose a new password.\n\nIf you did not request a reset, ignore this email.",
            name, link, code
        ),
    }
}

#[derive(Serialize)]
struct EmailApiRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Delivers mail through a JSON transactional email API.
pub struct HttpEmailSender {
    http_client: reqwest::Client,
    config: EmailApiConfig,
}

impl HttpEmailSender {
    pub fn new(http_client: reqwest::Client, config: EmailApiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        self.http_client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&EmailApiRequest {
                from: &self.config.sender,
                to: &message.to,
                subject: &message.subject,
                text: &message.body,
            })
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Sent '{}' to {}", message.subject, message.to);

        Ok(())
    }
}

/// Writes mail to the log instead of sending it.
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        tracing::info!(
            "Email to {} <{}>: {}\n{}",
            message.name,
            message.to,
            message.subject,
            message.body
        );

        Ok(())
    }
}
