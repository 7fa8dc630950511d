use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        client::{ClientDto, ProfileImageDto, UpdateClientProfileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::account::Role,
        service::profile::ProfileService, state::AppState,
    },
};

/// Tag for grouping client profile endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Get the profile of the signed-in client.
///
/// # Access Control
/// - `Client` - Only their own profile
///
/// # Returns
/// - `200 OK` - Client profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    get,
    path = "/api/client/profile",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Client profile", body = ClientDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let client = ProfileService::new(&state.db, &state.storage_url)
        .get_client_profile(&user.id)
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Update the profile of the signed-in client.
///
/// Fields left out of the body keep their current value.
///
/// # Access Control
/// - `Client` - Only their own profile
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Malformed phone number, gender or birth date
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/client/profile",
    tag = CLIENT_TAG,
    request_body = UpdateClientProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ClientDto),
        (status = 400, description = "Malformed field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateClientProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let client = ProfileService::new(&state.db, &state.storage_url)
        .update_client_profile(&user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Point the client's profile image at an uploaded object key.
#[utoipa::path(
    put,
    path = "/api/client/profile/image",
    tag = CLIENT_TAG,
    request_body = ProfileImageDto,
    responses(
        (status = 200, description = "Profile image updated", body = MessageDto),
        (status = 400, description = "Missing key", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn update_profile_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProfileImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    ProfileService::new(&state.db, &state.storage_url)
        .update_client_image(&user.id, payload.key.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Profile image updated successfully")),
    ))
}
