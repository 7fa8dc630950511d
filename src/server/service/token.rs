//! JWT access and refresh tokens.
//!
//! Access tokens carry the user's role and are sent as bearer tokens. Refresh
//! tokens are signed with a separate secret and only live in the server-side
//! session.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::account::{Account, Role, TokenPair},
};

const ACCESS_TOKEN_DAYS: i64 = 1;
const REFRESH_TOKEN_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Issues and verifies HS256 tokens.
#[derive(Clone)]
pub struct TokenService {
    access: Keys,
    refresh: Keys,
}

impl TokenService {
    pub fn new(access_secret: &str, refresh_secret: &str) -> Self {
        Self {
            access: Keys::new(access_secret),
            refresh: Keys::new(refresh_secret),
        }
    }

    pub fn create_access_token(&self, email: &str, id: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::days(ACCESS_TOKEN_DAYS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.access.encoding)?)
    }

    pub fn create_refresh_token(&self, email: &str, id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = RefreshClaims {
            sub: id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(REFRESH_TOKEN_DAYS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.refresh.encoding)?)
    }

    /// Creates both tokens for a logged in account.
    pub fn create_pair(&self, account: &Account) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.create_access_token(&account.email, &account.id, account.role)?,
            refresh_token: self.create_refresh_token(&account.email, &account.id)?,
        })
    }

    /// Verifies an access token.
    ///
    /// # Returns
    /// - `Ok(AccessClaims)` - Signature and expiry are valid
    /// - `Err(AuthError::TokenExpired)` - Token expired
    /// - `Err(AuthError::InvalidToken)` - Any other failure
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        verify(token, &self.access.decoding)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        verify(token, &self.refresh.decoding)
    }
}

fn verify<T: DeserializeOwned>(token: &str, key: &DecodingKey) -> Result<T, AuthError> {
    decode::<T>(token, key, &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
}
