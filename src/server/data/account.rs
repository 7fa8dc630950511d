//! Shared account lookups used by the authentication flows.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::account::{Account, Role};

/// Storage for one kind of account (admin, lawyer or client).
///
/// Lets the login, OTP and token refresh flows be written once for all roles.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Role of the accounts held by this store.
    fn role(&self) -> Role;

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DbErr>;

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, DbErr>;

    async fn mark_verified(&self, id: &str) -> Result<(), DbErr>;

    /// Replaces the stored password hash.
    async fn set_password(&self, id: &str, password_hash: &str) -> Result<(), DbErr>;
}
