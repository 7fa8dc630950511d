use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            AccessTokenDto, ForgotPasswordDto, LoginDto, LoginSuccessDto, OtpSentDto,
            OtpVerificationDto, RegisterLawyerDto, ResendOtpDto, UpdatePasswordDto,
        },
    },
    server::{
        controller::{otp_sent, refreshed, signed_in},
        error::AppError,
        middleware::session::RefreshSession,
        model::account::Role,
        service::auth::lawyer::LawyerAuthService,
        state::AppState,
    },
};

/// Tag for grouping lawyer authentication endpoints in OpenAPI documentation
pub static LAWYER_AUTH_TAG: &str = "lawyer-auth";

/// Register a lawyer.
///
/// The account stays unverified until an admin verifies it, so the lawyer
/// cannot log in right away.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Lawyer stored
/// - `400 Bad Request` - Missing or malformed field, no qualification
/// - `409 Conflict` - Email already exists
#[utoipa::path(
    post,
    path = "/api/lawyer/auth",
    tag = LAWYER_AUTH_TAG,
    request_body = RegisterLawyerDto,
    responses(
        (status = 201, description = "Lawyer created", body = MessageDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 409, description = "Email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterLawyerDto>,
) -> Result<impl IntoResponse, AppError> {
    let lawyer = LawyerAuthService::new(state.auth())
        .register(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(format!(
            "Lawyer created successfully with ID {}",
            lawyer.id
        ))),
    ))
}

/// Check lawyer credentials and mail a login code.
///
/// # Returns
/// - `200 OK` - Login code sent
/// - `401 Unauthorized` - Invalid credentials or not verified by an admin yet
/// - `403 Forbidden` - Account blocked
#[utoipa::path(
    post,
    path = "/api/lawyer/auth/login",
    tag = LAWYER_AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login code sent", body = OtpSentDto),
        (status = 401, description = "Invalid credentials or unverified account", body = ErrorDto),
        (status = 403, description = "Account blocked", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = LawyerAuthService::new(state.auth()).login(payload).await?;

    Ok((StatusCode::OK, otp_sent(sent)))
}

/// Mail a new login code, valid for ten minutes.
#[utoipa::path(
    post,
    path = "/api/lawyer/auth/resend-otp",
    tag = LAWYER_AUTH_TAG,
    request_body = ResendOtpDto,
    responses(
        (status = 200, description = "Code sent", body = OtpSentDto),
        (status = 403, description = "Account blocked", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(payload): Json<ResendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = LawyerAuthService::new(state.auth())
        .resend_otp(payload)
        .await?;

    Ok((StatusCode::OK, otp_sent(sent)))
}

/// Exchange a login code for tokens.
///
/// # Returns
/// - `200 OK` - Signed in; refresh token stored in the session
/// - `401 Unauthorized` - Wrong or expired code
#[utoipa::path(
    post,
    path = "/api/lawyer/auth/validate-otp",
    tag = LAWYER_AUTH_TAG,
    request_body = OtpVerificationDto,
    responses(
        (status = 200, description = "Signed in", body = LoginSuccessDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn validate_otp(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OtpVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let success = LawyerAuthService::new(state.auth())
        .verify_otp(payload)
        .await?;

    signed_in(&session, success).await
}

#[utoipa::path(
    get,
    path = "/api/lawyer/auth/refresh",
    tag = LAWYER_AUTH_TAG,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 401, description = "Missing or invalid refresh token", body = ErrorDto),
        (status = 403, description = "Account blocked", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let refresh_token = RefreshSession::new(&session, Role::Lawyer)
        .require_token()
        .await?;

    let success = LawyerAuthService::new(state.auth())
        .refresh(&refresh_token)
        .await?;

    refreshed(&session, success).await
}

#[utoipa::path(
    post,
    path = "/api/lawyer/auth/forgot-password",
    tag = LAWYER_AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset mail sent", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    LawyerAuthService::new(state.auth())
        .forgot_password(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password reset link sent to your email")),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/lawyer/auth/update-password",
    tag = LAWYER_AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Missing field or weak password", body = ErrorDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    LawyerAuthService::new(state.auth())
        .update_password(payload)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password updated successfully"))))
}

#[utoipa::path(
    post,
    path = "/api/lawyer/auth/logout",
    tag = LAWYER_AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    RefreshSession::new(&session, Role::Lawyer).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out successfully"))))
}
