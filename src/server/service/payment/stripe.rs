//! Stripe checkout integration over its REST API.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::collections::HashMap;

use crate::server::{
    config::StripeConfig,
    error::{payment::PaymentError, AppError},
    service::payment::{
        CheckoutRequest, CheckoutSession, PaymentGateway, WebhookEvent, WebhookEventKind,
    },
};

/// Maximum age of a webhook signature timestamp.
const SIGNATURE_TOLERANCE_SECONDS: i64 = 300;

const PRODUCT_NAME: &str = "Legal consultation";

#[derive(Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

#[derive(Deserialize)]
struct StripeEvent {
    #[serde(rename = "type")]
    kind: String,
    data: StripeEventData,
}

#[derive(Deserialize)]
struct StripeEventData {
    object: StripeObject,
}

#[derive(Deserialize)]
struct StripeObject {
    #[serde(default)]
    metadata: HashMap<String, String>,
    #[serde(default)]
    payment_intent: Option<String>,
}

pub struct StripeGateway {
    http_client: reqwest::Client,
    config: StripeConfig,
}

impl StripeGateway {
    pub fn new(http_client: reqwest::Client, config: StripeConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<reqwest::Response, AppError> {
        let response = self
            .http_client
            .post(format!("{}{}", self.config.api_url, path))
            .bearer_auth(&self.config.secret_key)
            .form(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Provider(format!("{} returned {}: {}", path, status, body)).into());
        }

        Ok(response)
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        let form = checkout_form(request);

        let session: SessionResponse = self.post_form("/checkout/sessions", &form).await?.json().await?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Provider("checkout session without url".to_string()))?;

        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }

    async fn refund(&self, transaction_id: &str, amount: i64) -> Result<(), AppError> {
        let form = vec![
            ("payment_intent".to_string(), transaction_id.to_string()),
            ("amount".to_string(), (amount * 100).to_string()),
        ];

        self.post_form("/refunds", &form).await?;

        tracing::info!("Refunded {} for transaction {}", amount, transaction_id);

        Ok(())
    }

    async fn expire_checkout_session(&self, session_id: &str) -> Result<(), AppError> {
        self.post_form(&format!("/checkout/sessions/{}/expire", session_id), &[])
            .await?;

        Ok(())
    }

    fn parse_webhook(&self, body: &str, signature: &str) -> Result<WebhookEvent, PaymentError> {
        verify_signature(
            body,
            signature,
            &self.config.webhook_secret,
            Utc::now().timestamp(),
        )?;

        parse_event(body)
    }
}

/// Form fields of a hosted checkout session for one consultation.
fn checkout_form(request: CheckoutRequest) -> Vec<(String, String)> {
    [
        ("mode", "payment".to_string()),
        ("payment_method_types[0]", "card".to_string()),
        ("success_url", request.success_url),
        ("cancel_url", request.cancel_url),
        ("expires_at", request.expires_at.timestamp().to_string()),
        ("line_items[0][quantity]", "1".to_string()),
        (
            "line_items[0][price_data][currency]",
            request.currency.to_lowercase(),
        ),
        (
            "line_items[0][price_data][unit_amount]",
            (request.amount * 100).to_string(),
        ),
        (
            "line_items[0][price_data][product_data][name]",
            PRODUCT_NAME.to_string(),
        ),
        ("metadata[paymentId]", request.payment_id.clone()),
        (
            "payment_intent_data[metadata][paymentId]",
            request.payment_id,
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Checks a `t=<unix>,v1=<hex>` signature header against the raw body.
///
/// # Arguments
/// - `body` - Raw request body as received
/// - `header` - Value of the signature header
/// - `secret` - Webhook signing secret
/// - `now` - Current unix time
///
/// # Returns
/// - `Ok(())` - One of the `v1` signatures matches and the timestamp is recent
/// - `Err(PaymentError::InvalidSignature)` - Otherwise
pub fn verify_signature(
    body: &str,
    header: &str,
    secret: &str,
    now: i64,
) -> Result<(), PaymentError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
            Some(("v1", value)) => signatures.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(PaymentError::InvalidSignature)?;
    if (now - timestamp).abs() > SIGNATURE_TOLERANCE_SECONDS {
        return Err(PaymentError::InvalidSignature);
    }

    let signed_payload = format!("{}.{}", timestamp, body);

    let matches = signatures.into_iter().any(|signature| {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
            return false;
        };
        mac.update(signed_payload.as_bytes());
        mac.verify_slice(&expected).is_ok()
    });

    if matches {
        Ok(())
    } else {
        Err(PaymentError::InvalidSignature)
    }
}

fn parse_event(body: &str) -> Result<WebhookEvent, PaymentError> {
    let event: StripeEvent = serde_json::from_str(body)?;

    let kind = match event.kind.as_str() {
        "checkout.session.completed" => WebhookEventKind::CheckoutCompleted,
        "charge.succeeded" => WebhookEventKind::ChargeSucceeded,
        _ => WebhookEventKind::Ignored,
    };

    let mut object = event.data.object;

    Ok(WebhookEvent {
        kind,
        payment_id: object.metadata.remove("paymentId"),
        transaction_id: object.payment_intent,
    })
}
