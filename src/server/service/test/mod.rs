use std::sync::Mutex;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, payment::PaymentError, AppError},
    service::{
        auth::AuthContext,
        email::{EmailMessage, EmailSender},
        oauth::{IdentityProvider, ProviderIdentity},
        password::PasswordHasher,
        payment::{CheckoutRequest, CheckoutSession, PaymentGateway, WebhookEvent},
        token::TokenService,
    },
};

mod admin_auth;
mod appointment;

const CLIENT_URL: &str = "http://localhost:5173";

/// Lowest cost bcrypt accepts, keeps hashing fast in tests.
const HASH_COST: u32 = 4;

/// Keeps every mail instead of delivering it.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Payment provider double.
///
/// Checkouts succeed after an optional delay, refunds are recorded or rejected
/// and `parse_webhook` hands out the configured event or rejects the signature
/// when there is none.
#[derive(Default)]
struct FakeGateway {
    event: Option<WebhookEvent>,
    checkout_delay: Option<std::time::Duration>,
    refunds_fail: bool,
    checkouts: Mutex<Vec<CheckoutRequest>>,
    refunds: Mutex<Vec<(String, i64)>>,
    expired: Mutex<Vec<String>>,
}

impl FakeGateway {
    fn delivering(event: WebhookEvent) -> Self {
        Self {
            event: Some(event),
            ..Default::default()
        }
    }

    /// Gateway whose checkout sessions take `delay` to open.
    fn slow_checkout(delay: std::time::Duration) -> Self {
        Self {
            checkout_delay: Some(delay),
            ..Default::default()
        }
    }

    /// Gateway whose provider rejects every refund.
    fn failing_refunds(self) -> Self {
        Self {
            refunds_fail: true,
            ..self
        }
    }

    fn checkouts(&self) -> Vec<CheckoutRequest> {
        self.checkouts.lock().unwrap().clone()
    }

    fn refunds(&self) -> Vec<(String, i64)> {
        self.refunds.lock().unwrap().clone()
    }

    fn expired(&self) -> Vec<String> {
        self.expired.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        if let Some(delay) = self.checkout_delay {
            tokio::time::sleep(delay).await;
        }

        let session = CheckoutSession {
            id: format!("cs_{}", request.payment_id),
            url: format!("https://checkout.test/{}", request.payment_id),
        };
        self.checkouts.lock().unwrap().push(request);

        Ok(session)
    }

    async fn refund(&self, transaction_id: &str, amount: i64) -> Result<(), AppError> {
        if self.refunds_fail {
            return Err(PaymentError::Provider("refund declined".to_string()).into());
        }

        self.refunds
            .lock()
            .unwrap()
            .push((transaction_id.to_string(), amount));
        Ok(())
    }

    async fn expire_checkout_session(&self, session_id: &str) -> Result<(), AppError> {
        self.expired.lock().unwrap().push(session_id.to_string());
        Ok(())
    }

    fn parse_webhook(&self, _body: &str, _signature: &str) -> Result<WebhookEvent, PaymentError> {
        self.event.clone().ok_or(PaymentError::InvalidSignature)
    }
}

/// Identity provider double that accepts a single authorization code.
struct FakeIdentityProvider {
    code: &'static str,
    identity: ProviderIdentity,
}

impl FakeIdentityProvider {
    fn accepting(code: &'static str, email: &str, email_verified: bool) -> Self {
        Self {
            code,
            identity: ProviderIdentity {
                email: email.to_string(),
                email_verified,
                name: Some("Asha Rao".to_string()),
                picture: Some("https://lh3.googleusercontent.com/a/pic".to_string()),
            },
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn identify(&self, code: &str) -> Result<ProviderIdentity, AppError> {
        if code != self.code {
            return Err(AuthError::OAuthFailed.into());
        }

        Ok(self.identity.clone())
    }
}

fn tokens() -> TokenService {
    TokenService::new("access-secret", "refresh-secret")
}

fn auth_context<'a>(
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mailer: &'a RecordingMailer,
) -> AuthContext<'a> {
    AuthContext {
        db,
        tokens,
        mailer,
        hasher: PasswordHasher::new(HASH_COST),
        client_url: CLIENT_URL,
    }
}
