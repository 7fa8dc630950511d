use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterClientDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterLawyerDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub specialization: Option<String>,
    pub experience: Option<i32>,
    pub bar_number: Option<String>,
    pub office_address: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OtpVerificationDto {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResendOtpDto {
    pub email: Option<String>,
    /// Resend the signup verification code rather than a login code.
    #[serde(default)]
    pub for_verification: bool,
}

/// Authorization code the OAuth provider redirected the frontend back with.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OAuthSigninDto {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePasswordDto {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Reset code mailed by the forgot-password step.
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OtpSentDto {
    pub message: String,
    pub email: String,
}

/// Returned once a login or OTP check succeeds.
///
/// The refresh token is kept in the server-side session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginSuccessDto {
    pub message: String,
    pub access_token: String,
    pub user_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
}
