use std::sync::Arc;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, GoogleOAuthConfig},
    error::{config::ConfigError, AppError},
    realtime::RealtimeHub,
    service::{
        auth::admin::AdminAuthService,
        email::{EmailSender, HttpEmailSender, LogEmailSender},
        oauth::{GoogleIdentityProvider, IdentityProvider, UnconfiguredIdentityProvider},
        password::PasswordHasher,
        payment::{stripe::StripeGateway, PaymentGateway, UnconfiguredGateway},
        token::TokenService,
    },
    state::{AppState, OAuth2Client},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions only hold refresh tokens, so they expire after the same seven days
/// of inactivity as the tokens themselves.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer with the session table migrated
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// Builds the HTTP client used for the payment, email and OAuth APIs.
///
/// Redirects are disabled; every provider answers directly.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(client)
}

/// Picks the email sender; without API settings mail is written to the log.
pub fn setup_mailer(config: &Config, http_client: &reqwest::Client) -> Arc<dyn EmailSender> {
    match &config.email_api {
        Some(email_api) => Arc::new(HttpEmailSender::new(
            http_client.clone(),
            email_api.clone(),
        )),
        None => {
            tracing::warn!("EMAIL_API_URL not set, emails will be logged instead of sent");
            Arc::new(LogEmailSender)
        }
    }
}

/// Picks the payment gateway; without Stripe credentials bookings fail cleanly.
pub fn setup_gateway(config: &Config, http_client: &reqwest::Client) -> Arc<dyn PaymentGateway> {
    match &config.stripe {
        Some(stripe) => Arc::new(StripeGateway::new(http_client.clone(), stripe.clone())),
        None => {
            tracing::warn!("STRIPE_SECRET_KEY not set, bookings are disabled");
            Arc::new(UnconfiguredGateway)
        }
    }
}

/// Picks the identity provider; without Google credentials OAuth sign-in is disabled.
///
/// # Returns
/// - `Ok(Arc<dyn IdentityProvider>)` - Google sign-in or the disabled provider
/// - `Err(ConfigError::InvalidEnvVar)` - The redirect URL is not a valid URL
pub fn setup_identity_provider(
    config: &Config,
    http_client: &reqwest::Client,
) -> Result<Arc<dyn IdentityProvider>, ConfigError> {
    match &config.google_oauth {
        Some(google) => Ok(Arc::new(GoogleIdentityProvider::new(
            setup_oauth_client(google)?,
            http_client.clone(),
        ))),
        None => {
            tracing::warn!("GOOGLE_CLIENT_ID not set, OAuth sign-in is disabled");
            Ok(Arc::new(UnconfiguredIdentityProvider))
        }
    }
}

fn setup_oauth_client(google: &GoogleOAuthConfig) -> Result<OAuth2Client, ConfigError> {
    let invalid = |name: &str, e: url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let client = BasicClient::new(ClientId::new(google.client_id.clone()))
        .set_client_secret(ClientSecret::new(google.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(google.auth_url.clone()).map_err(|e| invalid("GOOGLE_AUTH_URL", e))?)
        .set_token_uri(
            TokenUrl::new(google.token_url.clone()).map_err(|e| invalid("GOOGLE_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(google.redirect_url.clone())
                .map_err(|e| invalid("GOOGLE_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Assembles the shared state from configuration and connected resources.
pub fn build_state(
    config: &Config,
    db: DatabaseConnection,
    http_client: &reqwest::Client,
) -> Result<AppState, AppError> {
    Ok(AppState {
        db,
        tokens: TokenService::new(&config.access_token_secret, &config.refresh_token_secret),
        hasher: PasswordHasher::default(),
        mailer: setup_mailer(config, http_client),
        gateway: setup_gateway(config, http_client),
        identity: setup_identity_provider(config, http_client)?,
        hub: RealtimeHub::new(),
        client_url: config.client_url.clone(),
        storage_url: config.storage_public_url.clone(),
    })
}

/// Creates the first admin from configuration when no admin exists yet.
pub async fn seed_admin(state: &AppState, config: &Config) -> Result<(), AppError> {
    let created = AdminAuthService::new(state.auth())
        .seed_admin(&config.admin_email, &config.admin_password)
        .await?;

    if created {
        tracing::info!("Created initial admin account {}", config.admin_email);
    }

    Ok(())
}
