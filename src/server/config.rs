use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_STRIPE_API_URL: &str = "https://api.stripe.com/v1";
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Credentials for the hosted checkout provider.
#[derive(Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub webhook_secret: String,
    pub api_url: String,
}

/// Google OAuth client registration.
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Frontend page the provider redirects back to; must match the registration.
    pub redirect_url: String,

    pub auth_url: String,
    pub token_url: String,
}

/// Transactional email HTTP API settings.
#[derive(Clone)]
pub struct EmailApiConfig {
    pub api_url: String,
    pub api_key: String,
    pub sender: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub access_token_secret: String,
    pub refresh_token_secret: String,

    /// Frontend origin, used for CORS and for links sent to users.
    pub client_url: String,

    pub admin_email: String,
    pub admin_password: String,

    pub stripe: Option<StripeConfig>,
    pub email_api: Option<EmailApiConfig>,
    pub google_oauth: Option<GoogleOAuthConfig>,

    /// Base URL under which uploaded profile images are served.
    pub storage_public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let client_url = required("CLIENT_URL")?;
        Url::parse(&client_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "CLIENT_URL".to_string(),
            reason: e.to_string(),
        })?;

        let stripe = match optional("STRIPE_SECRET_KEY") {
            Some(secret_key) => Some(StripeConfig {
                secret_key,
                webhook_secret: required("STRIPE_WEBHOOK_SECRET")?,
                api_url: optional("STRIPE_API_URL")
                    .unwrap_or_else(|| DEFAULT_STRIPE_API_URL.to_string()),
            }),
            None => None,
        };

        let email_api = match optional("EMAIL_API_URL") {
            Some(api_url) => Some(EmailApiConfig {
                api_url,
                api_key: required("EMAIL_API_KEY")?,
                sender: required("SENDER_EMAIL")?,
            }),
            None => None,
        };

        let google_oauth = match optional("GOOGLE_CLIENT_ID") {
            Some(client_id) => Some(GoogleOAuthConfig {
                client_id,
                client_secret: required("GOOGLE_CLIENT_SECRET")?,
                redirect_url: required("GOOGLE_REDIRECT_URL")?,
                auth_url: GOOGLE_AUTH_URL.to_string(),
                token_url: GOOGLE_TOKEN_URL.to_string(),
            }),
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            access_token_secret: required("ACCESS_TOKEN_SECRET")?,
            refresh_token_secret: required("REFRESH_TOKEN_SECRET")?,
            client_url: client_url.trim_end_matches('/').to_string(),
            admin_email: required("ADMIN_EMAIL")?,
            admin_password: required("ADMIN_PASSWORD")?,
            stripe,
            email_api,
            google_oauth,
            storage_public_url: optional("STORAGE_PUBLIC_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
