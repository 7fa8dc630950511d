use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// Unknown email or wrong password.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// The account exists but belongs to a different role than the one logging in.
    #[error("Invalid role")]
    InvalidRole,

    /// An administrator blocked the account.
    #[error("Account is blocked")]
    AccountBlocked,

    /// Login attempted before the email address was verified.
    #[error("Please verify your email first")]
    EmailNotVerified,

    /// No OTP stored for the email or the code does not match.
    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP has expired")]
    OtpExpired,

    /// The `Authorization` header is missing or not a bearer token.
    #[error("Unauthorized: No or invalid Access token provided")]
    MissingToken,

    #[error("Access token expired")]
    TokenExpired,

    /// Signature, format or claims of the token are invalid.
    #[error("Unauthorized: Invalid Access token")]
    InvalidToken,

    /// The token is valid but its role may not use the endpoint.
    #[error("Forbidden: Access restricted")]
    AccessRestricted,

    /// No refresh token stored in the session.
    #[error("Refresh token not found")]
    MissingRefreshToken,

    /// The provider rejected the authorization code or returned no identity.
    #[error("OAuth sign-in failed")]
    OAuthFailed,

    /// No identity provider credentials are configured.
    #[error("OAuth sign-in is not available")]
    OAuthNotConfigured,
}

/// Converts authentication errors into HTTP responses.
///
/// The message of every variant is safe to show to the caller, so it is
/// returned as is.
///
/// # Returns
/// - 403 Forbidden - For blocked accounts and role restrictions
/// - 503 Service Unavailable - When OAuth sign-in is not configured
/// - 401 Unauthorized - For every other variant
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AccountBlocked | Self::AccessRestricted => StatusCode::FORBIDDEN,
            Self::OAuthNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::UNAUTHORIZED,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
