//! Sign-in through an external identity provider.
//!
//! The frontend posts the authorization code the provider redirected back with.
//! The server exchanges it for an access token and reads the identity from the
//! provider, so a caller can only sign in as the account the provider vouches for.

use async_trait::async_trait;
use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Identity confirmed by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderIdentity {
    pub email: String,
    /// Whether the provider confirmed the address belongs to the user.
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub picture: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges an authorization code for the identity it was issued to.
    ///
    /// # Returns
    /// - `Ok(ProviderIdentity)` - Identity the provider confirmed
    /// - `Err(AuthError::OAuthFailed)` - Code rejected or identity unavailable
    /// - `Err(AuthError::OAuthNotConfigured)` - No provider credentials set
    async fn identify(&self, code: &str) -> Result<ProviderIdentity, AppError>;
}

/// Google OpenID Connect sign-in.
pub struct GoogleIdentityProvider {
    oauth_client: OAuth2Client,
    http_client: reqwest::Client,
}

impl GoogleIdentityProvider {
    pub fn new(oauth_client: OAuth2Client, http_client: reqwest::Client) -> Self {
        Self {
            oauth_client,
            http_client,
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    async fn identify(&self, code: &str) -> Result<ProviderIdentity, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| {
                tracing::warn!("OAuth code exchange failed: {}", e);
                AuthError::OAuthFailed
            })?;

        let response = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Provider user info request returned {}", response.status());
            return Err(AuthError::OAuthFailed.into());
        }

        Ok(response.json::<ProviderIdentity>().await?)
    }
}

/// Used when no provider credentials are configured.
pub struct UnconfiguredIdentityProvider;

#[async_trait]
impl IdentityProvider for UnconfiguredIdentityProvider {
    async fn identify(&self, _code: &str) -> Result<ProviderIdentity, AppError> {
        Err(AuthError::OAuthNotConfigured.into())
    }
}
