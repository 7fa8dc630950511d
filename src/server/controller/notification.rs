use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{ClearNotificationsDto, NotificationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            account::{AuthUser, Role},
            notification::Recipient,
        },
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Notifications are only kept for clients and lawyers, which the guards below enforce.
fn recipient(user: &AuthUser) -> Recipient<'_> {
    match user.role {
        Role::Client => Recipient::Client(&user.id),
        _ => Recipient::Lawyer(&user.id),
    }
}

/// Get the signed-in user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications of the user", body = Vec<NotificationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    let notifications = NotificationService::new(&state.db, &state.hub)
        .list(recipient(&user))
        .await?;

    let dtos: Vec<NotificationDto> = notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete several of the signed-in user's notifications.
///
/// IDs belonging to someone else are ignored.
///
/// # Access Control
/// - `Client` or `Lawyer`
///
/// # Returns
/// - `200 OK` - Number of deleted notifications
/// - `400 Bad Request` - Malformed ID
#[utoipa::path(
    delete,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = ClearNotificationsDto,
    responses(
        (status = 200, description = "Notifications cleared", body = MessageDto),
        (status = 400, description = "Malformed ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn clear_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ClearNotificationsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    let deleted = NotificationService::new(&state.db, &state.hub)
        .clear_all(recipient(&user), payload.ids)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} notifications cleared", deleted))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(("id" = String, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification cleared", body = MessageDto),
        (status = 400, description = "Malformed ID", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn clear_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client, Role::Lawyer])
        .await?;

    NotificationService::new(&state.db, &state.hub)
        .clear_one(recipient(&user), &id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Notification cleared"))))
}
