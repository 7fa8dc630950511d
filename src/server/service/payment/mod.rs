//! Hosted checkout and refunds.
//!
//! The booking workflow only talks to the `PaymentGateway` trait. The Stripe
//! implementation lives in `stripe`; `UnconfiguredGateway` is used when no
//! provider credentials are set so that every payment operation fails cleanly.

pub mod stripe;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::server::error::{payment::PaymentError, AppError};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    /// Amount in major currency units.
    pub amount: i64,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
    /// Our payment id, echoed back in webhook metadata.
    pub payment_id: String,
    /// The session can no longer be paid after this instant.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookEventKind {
    CheckoutCompleted,
    ChargeSucceeded,
    Ignored,
}

/// Provider event reduced to what the booking workflow needs.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    pub kind: WebhookEventKind,
    pub payment_id: Option<String>,
    pub transaction_id: Option<String>,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, AppError>;

    /// Refunds `amount` major units of a captured transaction.
    async fn refund(&self, transaction_id: &str, amount: i64) -> Result<(), AppError>;

    /// Closes an unpaid checkout session so it can no longer be paid.
    async fn expire_checkout_session(&self, session_id: &str) -> Result<(), AppError>;

    /// Verifies the signature header and decodes the event body.
    fn parse_webhook(&self, body: &str, signature: &str) -> Result<WebhookEvent, PaymentError>;
}

pub struct UnconfiguredGateway;

#[async_trait]
impl PaymentGateway for UnconfiguredGateway {
    async fn create_checkout_session(
        &self,
        _request: CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        Err(PaymentError::NotConfigured.into())
    }

    async fn refund(&self, _transaction_id: &str, _amount: i64) -> Result<(), AppError> {
        Err(PaymentError::NotConfigured.into())
    }

    async fn expire_checkout_session(&self, _session_id: &str) -> Result<(), AppError> {
        Err(PaymentError::NotConfigured.into())
    }

    fn parse_webhook(&self, _body: &str, _signature: &str) -> Result<WebhookEvent, PaymentError> {
        Err(PaymentError::NotConfigured)
    }
}
