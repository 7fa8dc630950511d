use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, appointment::AppointmentDto, video::VideoSectionDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{account::Role, appointment::Viewer, video_section::VideoSection},
        service::{appointment::AppointmentService, video_section::VideoSectionService},
        state::AppState,
    },
};

/// Tag for grouping video session endpoints in OpenAPI documentation
pub static VIDEO_TAG: &str = "video";

fn section_dtos(sections: Vec<VideoSection>) -> Json<Vec<VideoSectionDto>> {
    Json(sections.into_iter().map(|s| s.into_dto()).collect())
}

/// Get the signed-in client's confirmed sessions of the next two days.
#[utoipa::path(
    get,
    path = "/api/video/client/day",
    tag = VIDEO_TAG,
    responses(
        (status = 200, description = "Upcoming sessions", body = Vec<VideoSectionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_client_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let sections = VideoSectionService::new(&state.db)
        .next_two_days_for_client(&user.id)
        .await?;

    Ok((StatusCode::OK, section_dtos(sections)))
}

#[utoipa::path(
    get,
    path = "/api/video/client/{id}",
    tag = VIDEO_TAG,
    params(("id" = String, Path, description = "Video section ID")),
    responses(
        (status = 200, description = "Video section", body = VideoSectionDto),
        (status = 404, description = "Video section not found", body = ErrorDto)
    ),
)]
pub async fn get_client_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let section = VideoSectionService::new(&state.db)
        .get(&id, Viewer::Client(&user.id))
        .await?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

/// Get the signed-in lawyer's pending sessions that have not started yet.
#[utoipa::path(
    get,
    path = "/api/video/lawyer",
    tag = VIDEO_TAG,
    responses(
        (status = 200, description = "Upcoming sessions", body = Vec<VideoSectionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_lawyer_upcoming(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let sections = VideoSectionService::new(&state.db)
        .upcoming_for_lawyer(&user.id)
        .await?;

    Ok((StatusCode::OK, section_dtos(sections)))
}

#[utoipa::path(
    get,
    path = "/api/video/lawyer/day",
    tag = VIDEO_TAG,
    responses(
        (status = 200, description = "Confirmed sessions of the next two days", body = Vec<VideoSectionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_lawyer_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let sections = VideoSectionService::new(&state.db)
        .next_two_days_for_lawyer(&user.id)
        .await?;

    Ok((StatusCode::OK, section_dtos(sections)))
}

#[utoipa::path(
    get,
    path = "/api/video/lawyer/{id}",
    tag = VIDEO_TAG,
    params(("id" = String, Path, description = "Video section ID")),
    responses(
        (status = 200, description = "Video section", body = VideoSectionDto),
        (status = 404, description = "Video section not found", body = ErrorDto)
    ),
)]
pub async fn get_lawyer_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let section = VideoSectionService::new(&state.db)
        .get(&id, Viewer::Lawyer(&user.id))
        .await?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

/// Mark a session finished.
///
/// Completes both the video section and its appointment.
///
/// # Access Control
/// - `Lawyer` - Only their own sessions
///
/// # Returns
/// - `200 OK` - Completed appointment
/// - `400 Bad Request` - Session cancelled or already completed
/// - `404 Not Found` - No session with that room
#[utoipa::path(
    put,
    path = "/api/video/lawyer/complete/{room_id}",
    tag = VIDEO_TAG,
    params(("room_id" = String, Path, description = "Room ID of the session")),
    responses(
        (status = 200, description = "Session completed", body = AppointmentDto),
        (status = 400, description = "Session cannot be completed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto)
    ),
)]
pub async fn complete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let appointment = AppointmentService::new(
        &state.db,
        &state.hub,
        state.gateway.as_ref(),
        &state.client_url,
    )
    .complete_session(&user.id, &room_id)
    .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}
