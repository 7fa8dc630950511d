//! Lawyer authentication.
//!
//! Lawyers register with their credentials and wait for an admin to verify them;
//! login only works for verified lawyers.

use crate::{
    model::auth::{
        ForgotPasswordDto, LoginDto, OtpVerificationDto, RegisterLawyerDto, ResendOtpDto,
        UpdatePasswordDto,
    },
    server::{
        data::lawyer::LawyerRepository,
        error::AppError,
        model::{
            account::{AuthSuccess, OtpPurpose, OtpSent},
            lawyer::{CreateLawyerParams, Lawyer},
        },
        service::auth::{otp_fields, AuthContext, AuthFlow, LONG_OTP_MINUTES},
        util::validate,
    },
};

pub struct LawyerAuthService<'a> {
    ctx: AuthContext<'a>,
}

impl<'a> LawyerAuthService<'a> {
    pub fn new(ctx: AuthContext<'a>) -> Self {
        Self { ctx }
    }

    fn flow(&self) -> AuthFlow<'a, LawyerRepository<'a>> {
        AuthFlow::new(self.ctx, LawyerRepository::new(self.ctx.db))
    }

    /// Registers a lawyer awaiting admin verification.
    ///
    /// # Returns
    /// - `Ok(Lawyer)` - The stored lawyer
    /// - `Err(AppError::BadRequest)` - Missing or malformed field
    /// - `Err(AppError::Conflict)` - Email already exists
    pub async fn register(&self, dto: RegisterLawyerDto) -> Result<Lawyer, AppError> {
        validate::required(&[
            ("name", dto.name.as_deref()),
            ("email", dto.email.as_deref()),
            ("password", dto.password.as_deref()),
            ("phone", dto.phone.as_deref()),
        ])?;

        let qualifications: Vec<String> = dto
            .qualifications
            .iter()
            .map(|q| q.trim().to_string())
            .collect();
        if qualifications.is_empty() {
            return Err(AppError::BadRequest(
                "Missing required fields: qualifications".to_string(),
            ));
        }
        for qualification in &qualifications {
            validate::length("qualification", qualification, 2, 100)?;
        }

        let name = dto.name.unwrap_or_default().trim().to_string();
        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        let password = dto.password.unwrap_or_default();
        let phone = dto.phone.unwrap_or_default().trim().to_string();

        validate::length("name", &name, 3, 20)?;
        validate::email(&email)?;
        validate::password(&password)?;
        validate::phone(&phone)?;

        let repo = LawyerRepository::new(self.ctx.db);
        if repo.email_exists(&email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let lawyer = repo
            .create(CreateLawyerParams {
                name,
                email,
                password_hash: self.ctx.hasher.hash(&password)?,
                phone: Some(phone),
                qualifications,
                specialization: dto.specialization,
                experience: dto.experience,
                bar_number: dto.bar_number,
                office_address: dto.office_address,
                bio: dto.bio,
            })
            .await?;

        tracing::info!("Registered lawyer {}", lawyer.id);

        Ok(lawyer)
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

    /// Mails a new verification code valid for ten minutes.
    pub async fn resend_otp(&self, dto: ResendOtpDto) -> Result<OtpSent, AppError> {
        validate::required(&[("email", dto.email.as_deref())])?;
        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        validate::email(&email)?;

        let flow = self.flow();
        let account = flow.require_account(&email).await?;

        if dto.for_verification && account.is_verified {
            return Err(AppError::BadRequest(
                "Email is already verified".to_string(),
            ));
        }

        flow.issue_otp(
            &account.email,
            &account.name,
            OtpPurpose::Verification,
            LONG_OTP_MINUTES,
        )
        .await?;

        Ok(OtpSent {
            email: account.email,
        })
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSuccess, AppError> {
        self.flow().refresh(refresh_token).await
    }

    pub async fn forgot_password(&self, dto: ForgotPasswordDto) -> Result<(), AppError> {
        let link = format!("{}/lawyer/reset-password", self.ctx.client_url);
        self.flow().forgot_password(dto, &link).await
    }

    pub async fn update_password(&self, dto: UpdatePasswordDto) -> Result<(), AppError> {
        self.flow().update_password(dto).await
    }
}
