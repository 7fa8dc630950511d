use crate::{
    model::auth::{LoginDto, OtpVerificationDto},
    server::{
        data::admin::AdminRepository,
        error::AppError,
        model::account::{AuthSuccess, OtpSent},
        service::auth::{otp_fields, AuthContext, AuthFlow},
        util::validate,
    },
};

const SEEDED_ADMIN_NAME: &str = "Admin";

pub struct AdminAuthService<'a> {
    ctx: AuthContext<'a>,
}

impl<'a> AdminAuthService<'a> {
    pub fn new(ctx: AuthContext<'a>) -> Self {
        Self { ctx }
    }

    fn flow(&self) -> AuthFlow<'a, AdminRepository<'a>> {
        AuthFlow::new(self.ctx, AdminRepository::new(self.ctx.db))
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

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSuccess, AppError> {
        self.flow().refresh(refresh_token).await
    }

    /// Creates the first admin from the configured credentials when none exists.
    ///
    /// # Returns
    /// - `Ok(true)` - An admin was created
    /// - `Ok(false)` - An admin already existed
    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        let repo = AdminRepository::new(self.ctx.db);
        if repo.exists().await? {
            return Ok(false);
        }

        let email = email.trim().to_lowercase();
        validate::email(&email)?;

        let admin = repo
            .create(SEEDED_ADMIN_NAME, &email, &self.ctx.hasher.hash(password)?)
            .await?;

        tracing::info!("Seeded admin account {}", admin.id);

        Ok(true)
    }
}
