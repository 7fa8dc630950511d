//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying JWTs
//! - Email sender, payment gateway and identity provider behind trait objects
//! - Realtime hub for pushing events to connected users
//! - Frontend and storage URLs for generating links

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    realtime::RealtimeHub,
    service::{
        auth::AuthContext, email::EmailSender, oauth::IdentityProvider,
        password::PasswordHasher, payment::PaymentGateway, token::TokenService,
    },
};

/// OAuth2 client with the authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the decoded signing keys
/// - `Arc<dyn ..>` collaborators are reference counted
/// - `RealtimeHub` shares its channel map through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    pub tokens: TokenService,

    pub hasher: PasswordHasher,

    /// Transactional email delivery, or the logging sender when unconfigured.
    pub mailer: Arc<dyn EmailSender>,

    /// Hosted checkout provider used for bookings and refunds.
    pub gateway: Arc<dyn PaymentGateway>,

    /// Confirms OAuth sign-ins by exchanging the provider's authorization code.
    pub identity: Arc<dyn IdentityProvider>,

    pub hub: RealtimeHub,

    /// Frontend base URL used for checkout redirects and password reset links.
    pub client_url: String,

    /// Base URL under which uploaded profile images are served.
    pub storage_url: String,
}

impl AppState {
    /// Borrowed view of the collaborators the authentication services need.
    pub fn auth(&self) -> AuthContext<'_> {
        AuthContext {
            db: &self.db,
            tokens: &self.tokens,
            mailer: self.mailer.as_ref(),
            hasher: self.hasher,
            client_url: &self.client_url,
        }
    }
}
