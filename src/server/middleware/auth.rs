use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountStore, client::ClientRepository, lawyer::LawyerRepository},
    error::{auth::AuthError, AppError},
    model::account::{AuthUser, Role},
    service::token::TokenService,
};

/// Checks the caller's access token and role.
///
/// Lawyer and client tokens are only honoured while the account still exists
/// and is not blocked, so blocking takes effect before the token expires.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    token: Option<&'a str>,
}

impl<'a> AuthGuard<'a> {
    /// Guard reading the bearer token of the `Authorization` header.
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            token: bearer_token(headers),
        }
    }

    /// Guard for a token passed some other way, e.g. the WebSocket query string.
    pub fn with_token(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        token: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            tokens,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Authenticates the caller and checks they hold one of `roles`.
    ///
    /// # Arguments
    /// - `roles` - Roles allowed to continue
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Identity of the caller
    /// - `Err(AuthError::MissingToken)` - No bearer token
    /// - `Err(AuthError::TokenExpired)` - Token expired
    /// - `Err(AuthError::InvalidToken)` - Bad token or account no longer exists
    /// - `Err(AuthError::AccessRestricted)` - Role not in `roles`
    /// - `Err(AuthError::AccountBlocked)` - Account blocked by an admin
    pub async fn require(&self, roles: &[Role]) -> Result<AuthUser, AppError> {
        let Some(token) = self.token else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify_access_token(token)?;

        if !roles.contains(&claims.role) {
            return Err(AuthError::AccessRestricted.into());
        }

        let account = match claims.role {
            Role::Admin => None,
            Role::Lawyer => Some(
                LawyerRepository::new(self.db)
                    .find_account_by_id(&claims.sub)
                    .await?,
            ),
            Role::Client => Some(
                ClientRepository::new(self.db)
                    .find_account_by_id(&claims.sub)
                    .await?,
            ),
        };

        if let Some(account) = account {
            let Some(account) = account else {
                return Err(AuthError::InvalidToken.into());
            };
            if account.is_blocked {
                return Err(AuthError::AccountBlocked.into());
            }
        }

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Token of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
