//! Type-safe session management wrappers.
//!
//! The only thing kept in the server-side session is the refresh token of each
//! role the browser is signed in as. Keys are namespaced per role so a client and
//! an admin session in the same browser do not overwrite each other.

use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::account::Role,
};

const SESSION_REFRESH_CLIENT: &str = "auth:refresh:client";
const SESSION_REFRESH_LAWYER: &str = "auth:refresh:lawyer";
const SESSION_REFRESH_ADMIN: &str = "auth:refresh:admin";

fn refresh_key(role: Role) -> &'static str {
    match role {
        Role::Client => SESSION_REFRESH_CLIENT,
        Role::Lawyer => SESSION_REFRESH_LAWYER,
        Role::Admin => SESSION_REFRESH_ADMIN,
    }
}

/// Refresh token storage for one role.
pub struct RefreshSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
    role: Role,
}

impl<'a> RefreshSession<'a> {
    /// Creates a new RefreshSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    /// - `role` - Role whose token this wrapper manages
    pub fn new(session: &'a Session, role: Role) -> Self {
        Self { session, role }
    }

    /// Stores the refresh token issued at login, replacing an older one.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.session
            .insert(refresh_key(self.role), token.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the stored refresh token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token stored for the role
    /// - `Ok(None)` - Not signed in as the role
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(refresh_key(self.role)).await?)
    }

    /// Like `get_token`, but a missing token is an authentication error.
    pub async fn require_token(&self) -> Result<String, AppError> {
        self.get_token()
            .await?
            .ok_or_else(|| AuthError::MissingRefreshToken.into())
    }

    /// Removes the role's token; other roles stay signed in.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session
            .remove::<String>(refresh_key(self.role))
            .await?;
        Ok(())
    }
}
