use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// No payment provider credentials were configured.
    #[error("Payment gateway is not configured")]
    NotConfigured,

    /// The provider rejected a request or answered with an unexpected body.
    #[error("Payment provider request failed: {0}")]
    Provider(String),

    /// The webhook signature header is missing, malformed, stale or wrong.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The webhook body is not a valid event.
    #[error("Malformed webhook event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
}

/// Converts payment errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For webhook signature and body failures
/// - 502 Bad Gateway - When the provider fails
/// - 500 Internal Server Error - When no provider is configured
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidSignature | Self::MalformedEvent(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Provider(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment provider request failed".to_string(),
                )
            }
            Self::NotConfigured => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
