use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            AccessTokenDto, ForgotPasswordDto, LoginDto, LoginSuccessDto, OAuthSigninDto,
            OtpSentDto, OtpVerificationDto, RegisterClientDto, ResendOtpDto, UpdatePasswordDto,
        },
    },
    server::{
        controller::{otp_sent, refreshed, signed_in},
        error::AppError,
        middleware::session::RefreshSession,
        model::account::Role,
        service::auth::client::ClientAuthService,
        state::AppState,
    },
};

/// Tag for grouping client authentication endpoints in OpenAPI documentation
pub static CLIENT_AUTH_TAG: &str = "client-auth";

/// Register a new client account.
///
/// Stores an unverified account and mails a signup verification code. The
/// account can log in once the code was confirmed through
/// `signup-verification`.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and mailer
/// - `payload` - Name, email, password and optional phone
///
/// # Returns
/// - `201 Created` - Account stored, verification code sent
/// - `400 Bad Request` - Missing or malformed field
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/client/auth",
    tag = CLIENT_AUTH_TAG,
    request_body = RegisterClientDto,
    responses(
        (status = 201, description = "Account created, verification code sent", body = OtpSentDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = ClientAuthService::new(state.auth()).register(payload).await?;

    Ok((StatusCode::CREATED, otp_sent(sent)))
}

/// Check client credentials and mail a login code.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Credentials valid, login code sent
/// - `401 Unauthorized` - Invalid credentials or unverified email
/// - `403 Forbidden` - Account blocked
#[utoipa::path(
    post,
    path = "/api/client/auth/signin",
    tag = CLIENT_AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login code sent", body = OtpSentDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Invalid credentials or unverified email", body = ErrorDto),
        (status = 403, description = "Account blocked", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = ClientAuthService::new(state.auth()).login(payload).await?;

    Ok((StatusCode::OK, otp_sent(sent)))
}

/// Sign in with an authorization code from the OAuth provider.
///
/// The frontend completes the provider's consent screen and posts the code it
/// was redirected back with. The server redeems the code and signs in the
/// account of the verified email. First-time users get a verified account
/// without password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Signed in; refresh token stored in the session
/// - `400 Bad Request` - Missing code
/// - `401 Unauthorized` - Code rejected or email not verified by the provider
/// - `403 Forbidden` - Account blocked
/// - `503 Service Unavailable` - OAuth sign-in not configured
#[utoipa::path(
    post,
    path = "/api/client/auth/oauth",
    tag = CLIENT_AUTH_TAG,
    request_body = OAuthSigninDto,
    responses(
        (status = 200, description = "Signed in", body = LoginSuccessDto),
        (status = 400, description = "Missing code", body = ErrorDto),
        (status = 401, description = "Code rejected or email not verified", body = ErrorDto),
        (status = 403, description = "Account blocked", body = ErrorDto),
        (status = 503, description = "OAuth sign-in not configured", body = ErrorDto)
    ),
)]
pub async fn oauth_signin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OAuthSigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let success = ClientAuthService::new(state.auth())
        .oauth_signin(state.identity.as_ref(), payload)
        .await?;

    signed_in(&session, success).await
}

/// Mail a new signup or login code.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Code sent
/// - `400 Bad Request` - Email already verified when asking for a signup code
/// - `403 Forbidden` - Account blocked
/// - `404 Not Found` - No account for the email
#[utoipa::path(
    post,
    path = "/api/client/auth/resend-otp",
    tag = CLIENT_AUTH_TAG,
    request_body = ResendOtpDto,
    responses(
        (status = 200, description = "Code sent", body = OtpSentDto),
        (status = 400, description = "Email already verified", body = ErrorDto),
        (status = 403, description = "Account blocked", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(payload): Json<ResendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let sent = ClientAuthService::new(state.auth())
        .resend_otp(payload)
        .await?;

    Ok((StatusCode::OK, otp_sent(sent)))
}

/// Exchange a login code for tokens.
///
/// The access token is returned in the body; the refresh token is kept in the
/// server-side session under the client key.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Signed in
/// - `401 Unauthorized` - Wrong or expired code
/// - `404 Not Found` - No account for the email
#[utoipa::path(
    post,
    path = "/api/client/auth/otp-verification",
    tag = CLIENT_AUTH_TAG,
    request_body = OtpVerificationDto,
    responses(
        (status = 200, description = "Signed in", body = LoginSuccessDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OtpVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let success = ClientAuthService::new(state.auth())
        .verify_otp(payload)
        .await?;

    signed_in(&session, success).await
}

/// Confirm the signup code of a new account.
///
/// Marks the email verified without signing in.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Email verified
/// - `401 Unauthorized` - Wrong or expired code
/// - `404 Not Found` - No account for the email
#[utoipa::path(
    post,
    path = "/api/client/auth/signup-verification",
    tag = CLIENT_AUTH_TAG,
    request_body = OtpVerificationDto,
    responses(
        (status = 200, description = "Email verified", body = MessageDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn verify_signup(
    State(state): State<AppState>,
    Json(payload): Json<OtpVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    ClientAuthService::new(state.auth())
        .verify_signup(payload)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Email verified successfully"))))
}

/// Issue a new access token from the session's refresh token.
///
/// # Access Control
/// - Session holding a client refresh token
///
/// # Returns
/// - `200 OK` - New access token; refresh token rotated
/// - `401 Unauthorized` - No, expired or invalid refresh token
/// - `403 Forbidden` - Account blocked
#[utoipa::path(
    get,
    path = "/api/client/auth/refresh",
    tag = CLIENT_AUTH_TAG,
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
    let refresh_token = RefreshSession::new(&session, Role::Client)
        .require_token()
        .await?;

    let success = ClientAuthService::new(state.auth())
        .refresh(&refresh_token)
        .await?;

    refreshed(&session, success).await
}

/// Mail a password reset code and link.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Reset mail sent
/// - `404 Not Found` - No account for the email
#[utoipa::path(
    post,
    path = "/api/client/auth/forgot-password",
    tag = CLIENT_AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset mail sent", body = MessageDto),
        (status = 400, description = "Missing or malformed email", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    ClientAuthService::new(state.auth())
        .forgot_password(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password reset link sent to your email")),
    ))
}

/// Set a new password using the mailed reset code.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Password updated
/// - `400 Bad Request` - Missing field or weak password
/// - `401 Unauthorized` - Wrong or expired code
#[utoipa::path(
    patch,
    path = "/api/client/auth/update-password",
    tag = CLIENT_AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Missing field or weak password", body = ErrorDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    ClientAuthService::new(state.auth())
        .update_password(payload)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password updated successfully"))))
}

/// Forget the client refresh token of this session.
#[utoipa::path(
    post,
    path = "/api/client/auth/logout",
    tag = CLIENT_AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    RefreshSession::new(&session, Role::Client).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out successfully"))))
}
