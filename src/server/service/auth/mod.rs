//! Authentication flows.
//!
//! Login is two-step for every role: the password check mails a one-time code and
//! the code exchange issues tokens. `AuthFlow` implements the steps once on top of
//! an `AccountStore`; the role modules add registration, OTP resends, OAuth and
//! password resets where that role supports them.

pub mod admin;
pub mod client;
pub mod lawyer;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{ForgotPasswordDto, OtpVerificationDto, UpdatePasswordDto},
    server::{
        data::{account::AccountStore, otp::OtpRepository},
        error::{auth::AuthError, AppError},
        model::account::{Account, AuthSuccess, OtpPurpose, OtpSent},
        service::{
            email::{otp_message, password_reset_message, EmailSender},
            password::PasswordHasher,
            token::TokenService,
        },
        util::{id::new_otp_code, validate},
    },
};

/// Lifetime of login and signup codes.
pub const DEFAULT_OTP_MINUTES: i64 = 5;

/// Lifetime of password reset and lawyer verification codes.
pub const LONG_OTP_MINUTES: i64 = 10;

/// Shared collaborators of the authentication services.
#[derive(Clone, Copy)]
pub struct AuthContext<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
    pub mailer: &'a dyn EmailSender,
    pub hasher: PasswordHasher,
    /// Frontend origin used in mailed links.
    pub client_url: &'a str,
}

/// Login, OTP and refresh steps shared by every role.
pub struct AuthFlow<'a, S: AccountStore> {
    ctx: AuthContext<'a>,
    store: S,
}

impl<'a, S: AccountStore> AuthFlow<'a, S> {
    pub fn new(ctx: AuthContext<'a>, store: S) -> Self {
        Self { ctx, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Checks email and password and mails a login code.
    ///
    /// # Returns
    /// - `Ok(OtpSent)` - Credentials valid, code sent
    /// - `Err(AppError::BadRequest)` - Malformed email or password
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountBlocked)` - Account blocked by an admin
    /// - `Err(AuthError::EmailNotVerified)` - Email not verified yet
    pub async fn credential_login(&self, email: &str, password: &str) -> Result<OtpSent, AppError> {
        validate::email(email)?;
        validate::password(password)?;

        let account = self
            .store
            .find_account_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.ensure_role(&account)?;
        if account.is_blocked {
            return Err(AuthError::AccountBlocked.into());
        }
        if !account.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let password_matches = account
            .password_hash
            .as_deref()
            .is_some_and(|hash| self.ctx.hasher.verify(password, hash));
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_otp(&account.email, &account.name, OtpPurpose::Login, DEFAULT_OTP_MINUTES)
            .await?;

        Ok(OtpSent {
            email: account.email,
        })
    }

    /// Stores a fresh code for `email` and mails it.
    ///
    /// Delivery failures are logged and do not fail the call; the user can ask
    /// for a resend.
    pub async fn issue_otp(
        &self,
        email: &str,
        name: &str,
        purpose: OtpPurpose,
        expiry_minutes: i64,
    ) -> Result<String, AppError> {
        let code = new_otp_code();
        let expires_at = Utc::now() + Duration::minutes(expiry_minutes);

        OtpRepository::new(self.ctx.db)
            .replace(email, &code, expires_at)
            .await?;

        let message = otp_message(email, name, &code, purpose, expiry_minutes);
        if let Err(e) = self.ctx.mailer.send(message).await {
            tracing::warn!("Failed to send {:?} code to {}: {}", purpose, email, e);
        }

        Ok(code)
    }

    /// Checks a submitted code against the stored one.
    ///
    /// # Returns
    /// - `Ok(())` - Code matches and has not expired
    /// - `Err(AppError::BadRequest)` - Malformed email or code
    /// - `Err(AuthError::InvalidOtp)` - No code stored or mismatch
    /// - `Err(AuthError::OtpExpired)` - Code expired
    pub async fn validate_otp(&self, email: &str, code: &str) -> Result<(), AppError> {
        validate::email(email)?;
        validate::otp(code)?;

        let stored = OtpRepository::new(self.ctx.db)
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        if stored.code != code {
            return Err(AuthError::InvalidOtp.into());
        }
        if stored.expires_at < Utc::now() {
            return Err(AuthError::OtpExpired.into());
        }

        Ok(())
    }

    /// Exchanges a valid login code for tokens.
    ///
    /// Unverified accounts become verified, since receiving the code proves
    /// ownership of the address.
    pub async fn otp_login(&self, email: &str, code: &str) -> Result<AuthSuccess, AppError> {
        self.validate_otp(email, code).await?;

        let mut account = self.require_account(email).await?;

        if !account.is_verified {
            self.store.mark_verified(&account.id).await?;
            account.is_verified = true;
        }

        self.discard_otp(email).await?;

        self.sign_in(&account)
    }

    /// Issues a new token pair from a refresh token.
    ///
    /// # Returns
    /// - `Ok(AuthSuccess)` - New tokens
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Refresh token rejected
    /// - `Err(AuthError::InvalidCredentials)` - Account no longer exists
    /// - `Err(AuthError::AccountBlocked)` - Account was blocked meanwhile
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSuccess, AppError> {
        let claims = self.ctx.tokens.verify_refresh_token(refresh_token)?;

        let account = self
            .store
            .find_account_by_id(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.sign_in(&account)
    }

    /// Issues tokens for an account that proved its identity.
    pub fn sign_in(&self, account: &Account) -> Result<AuthSuccess, AppError> {
        self.ensure_role(account)?;
        if account.is_blocked {
            return Err(AuthError::AccountBlocked.into());
        }

        Ok(AuthSuccess {
            user_id: account.id.clone(),
            role: account.role,
            tokens: self.ctx.tokens.create_pair(account)?,
        })
    }

    /// Looks up an account by email or fails with 404 `User not found`.
    pub async fn require_account(&self, email: &str) -> Result<Account, AppError> {
        self.store
            .find_account_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Mails a reset code together with a link to the reset page at `link`.
    pub async fn forgot_password(&self, dto: ForgotPasswordDto, link: &str) -> Result<(), AppError> {
        validate::required(&[("email", dto.email.as_deref())])?;
        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        validate::email(&email)?;

        let account = self.require_account(&email).await?;

        let code = new_otp_code();
        let expires_at = Utc::now() + Duration::minutes(LONG_OTP_MINUTES);
        OtpRepository::new(self.ctx.db)
            .replace(&account.email, &code, expires_at)
            .await?;

        let message = password_reset_message(&account.email, &account.name, link, &code);
        if let Err(e) = self.ctx.mailer.send(message).await {
            tracing::warn!("Failed to send password reset mail to {}: {}", account.email, e);
        }

        Ok(())
    }

    /// Sets a new password once the mailed reset code checks out.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced, reset code consumed
    /// - `Err(AppError::BadRequest)` - Missing field or weak password
    /// - `Err(AuthError::InvalidOtp | OtpExpired)` - Reset code rejected
    /// - `Err(AppError::NotFound)` - No account with that email
    pub async fn update_password(&self, dto: UpdatePasswordDto) -> Result<(), AppError> {
        validate::required(&[
            ("email", dto.email.as_deref()),
            ("password", dto.password.as_deref()),
            ("otp", dto.otp.as_deref()),
        ])?;
        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        let password = dto.password.unwrap_or_default();
        validate::password(&password)?;

        self.validate_otp(&email, dto.otp.unwrap_or_default().trim())
            .await?;

        let account = self.require_account(&email).await?;
        let hash = self.ctx.hasher.hash(&password)?;
        self.store.set_password(&account.id, &hash).await?;

        OtpRepository::new(self.ctx.db).delete(&email).await?;

        tracing::info!("Password updated for {} {}", account.role, account.id);

        Ok(())
    }

    /// Deletes the stored code of `email`.
    pub async fn discard_otp(&self, email: &str) -> Result<(), AppError> {
        OtpRepository::new(self.ctx.db).delete(email).await?;
        Ok(())
    }

    fn ensure_role(&self, account: &Account) -> Result<(), AuthError> {
        if account.role == self.store.role() {
            Ok(())
        } else {
            Err(AuthError::InvalidRole)
        }
    }
}

/// Extracts the email and code of an OTP submission.
pub fn otp_fields(dto: OtpVerificationDto) -> Result<(String, String), AppError> {
    validate::required(&[("email", dto.email.as_deref()), ("otp", dto.otp.as_deref())])?;

    Ok((
        dto.email.unwrap_or_default().trim().to_lowercase(),
        dto.otp.unwrap_or_default().trim().to_string(),
    ))
}
