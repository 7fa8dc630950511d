//! Client authentication: signup, OTP login, OAuth sign-in and password reset.

use crate::{
    model::auth::{
        ForgotPasswordDto, LoginDto, OAuthSigninDto, OtpVerificationDto, RegisterClientDto,
        ResendOtpDto, UpdatePasswordDto,
    },
    server::{
        data::{account::AccountStore, client::ClientRepository},
        error::{auth::AuthError, AppError},
        model::{
            account::{Account, AuthSuccess, OtpPurpose, OtpSent},
            client::CreateClientParams,
        },
        service::{
            auth::{otp_fields, AuthContext, AuthFlow, DEFAULT_OTP_MINUTES},
            oauth::IdentityProvider,
        },
        util::validate,
    },
};

pub struct ClientAuthService<'a> {
    ctx: AuthContext<'a>,
}

impl<'a> ClientAuthService<'a> {
    pub fn new(ctx: AuthContext<'a>) -> Self {
        Self { ctx }
    }

    fn flow(&self) -> AuthFlow<'a, ClientRepository<'a>> {
        AuthFlow::new(self.ctx, ClientRepository::new(self.ctx.db))
    }

    /// Registers an unverified client and mails a signup code.
    ///
    /// # Returns
    /// - `Ok(OtpSent)` - Account stored, code sent
    /// - `Err(AppError::BadRequest)` - Missing or malformed field
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, dto: RegisterClientDto) -> Result<OtpSent, AppError> {
        validate::required(&[
            ("name", dto.name.as_deref()),
            ("email", dto.email.as_deref()),
            ("password", dto.password.as_deref()),
        ])?;

        let name = dto.name.unwrap_or_default().trim().to_string();
        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        let password = dto.password.unwrap_or_default();
        let phone = dto.phone.filter(|p| !p.trim().is_empty());

        validate::length("name", &name, 3, 20)?;
        validate::email(&email)?;
        validate::password(&password)?;
        if let Some(phone) = &phone {
            validate::phone(phone)?;
        }

        let repo = ClientRepository::new(self.ctx.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let client = repo
            .create(CreateClientParams {
                name,
                email,
                password_hash: Some(self.ctx.hasher.hash(&password)?),
                phone,
                profile_image: None,
                is_verified: false,
            })
            .await?;

        tracing::info!("Registered client {}", client.id);

        self.flow()
            .issue_otp(&client.email, &client.name, OtpPurpose::Register, DEFAULT_OTP_MINUTES)
            .await?;

        Ok(OtpSent {
            email: client.email,
        })
    }

    pub async fn login(&self, dto: LoginDto) -> Result<OtpSent, AppError> {
        validate::required(&[
            ("email", dto.email.as_deref()),
            ("password", dto.password.as_deref()),
        ])?;

        self.flow()
            .credential_login(
                &dto.email.unwrap_or_default().trim().to_lowercase(),
                &dto.password.unwrap_or_default(),
            )
            .await
    }

    pub async fn verify_otp(&self, dto: OtpVerificationDto) -> Result<AuthSuccess, AppError> {
        let (email, otp) = otp_fields(dto)?;
        self.flow().otp_login(&email, &otp).await
    }

    /// Confirms the signup code without logging in.
    pub async fn verify_signup(&self, dto: OtpVerificationDto) -> Result<(), AppError> {
        let (email, otp) = otp_fields(dto)?;
        let flow = self.flow();

        flow.validate_otp(&email, &otp).await?;
        let account = flow.require_account(&email).await?;

        flow.store().mark_verified(&account.id).await?;
        flow.discard_otp(&email).await?;

        tracing::info!("Client {} verified their email", account.id);

        Ok(())
    }

    /// Sends a new code; a signup code for unverified accounts, a login code otherwise.
    pub async fn resend_otp(&self, dto: ResendOtpDto) -> Result<OtpSent, AppError> {
        validate::required(&[("email", dto.email.as_deref())])?;
        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        validate::email(&email)?;

        let flow = self.flow();
        let account = flow.require_account(&email).await?;

        if account.is_blocked {
            return Err(AuthError::AccountBlocked.into());
        }
        if account.is_verified && dto.for_verification {
            return Err(AppError::BadRequest(
                "Email is already verified".to_string(),
            ));
        }

        let purpose = if account.is_verified {
            OtpPurpose::Login
        } else {
            OtpPurpose::Register
        };

        flow.issue_otp(&account.email, &account.name, purpose, DEFAULT_OTP_MINUTES)
            .await?;

        Ok(OtpSent {
            email: account.email,
        })
    }

    /// Signs in with an authorization code from the OAuth provider.
    ///
    /// The code is redeemed with the provider; only an address the provider
    /// reports as verified is trusted. Creates a verified, passwordless account
    /// on first sign-in.
    ///
    /// # Returns
    /// - `Ok(AuthSuccess)` - Tokens for the provider's account
    /// - `Err(AppError::BadRequest)` - Missing code
    /// - `Err(AuthError::OAuthFailed)` - Provider rejected the code
    /// - `Err(AuthError::EmailNotVerified)` - Provider did not verify the address
    /// - `Err(AuthError::AccountBlocked)` - Existing account is blocked
    pub async fn oauth_signin(
        &self,
        provider: &dyn IdentityProvider,
        dto: OAuthSigninDto,
    ) -> Result<AuthSuccess, AppError> {
        validate::required(&[("code", dto.code.as_deref())])?;
        let identity = provider.identify(dto.code.unwrap_or_default().trim()).await?;

        if !identity.email_verified {
            return Err(AuthError::EmailNotVerified.into());
        }
        let email = identity.email.trim().to_lowercase();
        validate::email(&email)?;

        let flow = self.flow();
        let account = match flow.store().find_account_by_email(&email).await? {
            Some(account) => account,
            None => {
                let name = identity
                    .name
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

                let client = ClientRepository::new(self.ctx.db)
                    .create(CreateClientParams {
                        name,
                        email,
                        password_hash: None,
                        phone: None,
                        profile_image: identity.picture,
                        is_verified: true,
                    })
                    .await?;

                tracing::info!("Registered client {} through OAuth", client.id);

                Account {
                    id: client.id,
                    name: client.name,
                    email: client.email,
                    password_hash: None,
                    role: flow.store().role(),
                    is_verified: true,
                    is_blocked: false,
                }
            }
        };

        flow.sign_in(&account)
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSuccess, AppError> {
        self.flow().refresh(refresh_token).await
    }

    pub async fn forgot_password(&self, dto: ForgotPasswordDto) -> Result<(), AppError> {
        let link = format!("{}/client/reset-password", self.ctx.client_url);
        self.flow().forgot_password(dto, &link).await
    }

    pub async fn update_password(&self, dto: UpdatePasswordDto) -> Result<(), AppError> {
        self.flow().update_password(dto).await
    }
}
