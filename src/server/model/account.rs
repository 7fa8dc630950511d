//! Account and authentication models shared by the three roles.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user, carried in access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Lawyer,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Lawyer => "lawyer",
            Role::Client => "client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login-relevant view of an admin, lawyer or client record.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `None` for accounts created through OAuth sign-in.
    pub password_hash: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub is_blocked: bool,
}

impl Account {
    /// Admins are seeded, so they are always verified and never blocked.
    pub fn from_admin(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: Some(entity.password),
            role: Role::Admin,
            is_verified: true,
            is_blocked: false,
        }
    }

    pub fn from_client(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            role: Role::Client,
            is_verified: entity.is_verified,
            is_blocked: entity.is_blocked,
        }
    }

    pub fn from_lawyer(entity: entity::lawyer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: Some(entity.password),
            role: Role::Lawyer,
            is_verified: entity.is_verified,
            is_blocked: entity.is_blocked,
        }
    }
}

/// Identity extracted from a verified access token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a completed login.
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub user_id: String,
    pub role: Role,
    pub tokens: TokenPair,
}

/// What a one-time code is sent for; selects the email subject and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    Register,
    Login,
    Verification,
    PasswordReset,
}

/// Outcome of a step that mailed a one-time code.
#[derive(Debug, Clone)]
pub struct OtpSent {
    pub email: String,
}

impl OtpSent {
    pub const MESSAGE: &'static str = "Please check your email for verification code";
}

/// One-time code stored for an email address.
#[derive(Debug, Clone)]
pub struct Otp {
    pub email: String,
    pub code: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl Otp {
    pub fn from_entity(entity: entity::otp::Model) -> Self {
        Self {
            email: entity.email,
            code: entity.code,
            expires_at: entity.expires_at,
        }
    }
}
