use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AccessTokenDto, LoginDto, LoginSuccessDto, OtpSentDto, OtpVerificationDto},
    },
    server::{
        controller::{otp_sent, refreshed, signed_in},
        error::AppError,
        middleware::session::RefreshSession,
        model::account::Role,
        service::auth::admin::AdminAuthService,
        state::AppState,
    },
};

/// Tag for grouping admin authentication endpoints in OpenAPI documentation
pub static ADMIN_AUTH_TAG: &str = "admin-auth";

/// Check admin credentials and mail a login code.
///
/// # Returns
/// - `200 OK` - Login code sent
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/admin/auth",
    tag = ADMIN_AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login code sent", body = OtpSentDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = AdminAuthService::new(state.auth()).login(payload).await?;

    Ok((StatusCode::OK, otp_sent(sent)))
}

#[utoipa::path(
    post,
    path = "/api/admin/auth/otp-verification",
    tag = ADMIN_AUTH_TAG,
    request_body = OtpVerificationDto,
    responses(
        (status = 200, description = "Signed in", body = LoginSuccessDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OtpVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let success = AdminAuthService::new(state.auth())
        .verify_otp(payload)
        .await?;

    signed_in(&session, success).await
}

#[utoipa::path(
    get,
    path = "/api/admin/auth/refresh",
    tag = ADMIN_AUTH_TAG,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 401, description = "Missing or invalid refresh token", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let refresh_token = RefreshSession::new(&session, Role::Admin)
        .require_token()
        .await?;

    let success = AdminAuthService::new(state.auth())
        .refresh(&refresh_token)
        .await?;

    refreshed(&session, success).await
}

#[utoipa::path(
    post,
    path = "/api/admin/auth/logout",
    tag = ADMIN_AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    RefreshSession::new(&session, Role::Admin).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out successfully"))))
}
