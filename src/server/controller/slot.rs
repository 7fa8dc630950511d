use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        slot::{SlotChangeDto, SlotDto, SlotTimesDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{account::Role, slot::Slot},
        service::slot::SlotService,
        state::AppState,
        util::validate,
    },
};

/// Tag for grouping availability slot endpoints in OpenAPI documentation
pub static SLOT_TAG: &str = "slot";

#[derive(Deserialize)]
pub struct SlotDayParams {
    pub day: Option<String>,
}

#[derive(Deserialize)]
pub struct SlotDateParams {
    pub date: Option<String>,
}

fn slot_service(state: &AppState) -> SlotService<'_> {
    SlotService::new(
        &state.db,
        &state.hub,
        state.gateway.as_ref(),
        &state.client_url,
    )
}

fn slot_dtos(slots: Vec<Slot>) -> Json<Vec<SlotDto>> {
    Json(slots.into_iter().map(|s| s.into_dto()).collect())
}

fn changed(message: &str, affected: u64) -> Json<SlotChangeDto> {
    Json(SlotChangeDto {
        message: message.to_string(),
        affected,
    })
}

/// Add start times to one weekday of the signed-in lawyer.
///
/// Start times use the `hh:mm AM|PM` format; times that already exist on that
/// day are skipped. Every slot lasts one hour.
///
/// # Access Control
/// - `Lawyer`
///
/// # Returns
/// - `201 Created` - Number of slots added
/// - `400 Bad Request` - Missing day, invalid weekday or start time
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/slots/day",
    tag = SLOT_TAG,
    request_body = SlotTimesDto,
    responses(
        (status = 201, description = "Slots added", body = SlotChangeDto),
        (status = 400, description = "Invalid day or start time", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn create_for_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SlotTimesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    validate::required(&[("day", payload.day.as_deref())])?;
    let day = payload.day.unwrap_or_default();

    let created = slot_service(&state)
        .create_for_day(&user.id, &payload.start_times, &day)
        .await?;

    Ok((StatusCode::CREATED, changed("Slots created successfully", created)))
}

/// Add start times to every weekday of the signed-in lawyer.
#[utoipa::path(
    post,
    path = "/api/slots/all-days",
    tag = SLOT_TAG,
    request_body = SlotTimesDto,
    responses(
        (status = 201, description = "Slots added", body = SlotChangeDto),
        (status = 400, description = "Invalid start time", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn create_for_all_days(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SlotTimesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let created = slot_service(&state)
        .create_for_all_days(&user.id, &payload.start_times)
        .await?;

    Ok((StatusCode::CREATED, changed("Slots created successfully", created)))
}

/// Remove start times from one weekday of the signed-in lawyer.
///
/// Upcoming appointments held by a removed slot are cancelled and refunded.
///
/// # Access Control
/// - `Lawyer`
///
/// # Returns
/// - `200 OK` - Number of slots removed
/// - `400 Bad Request` - Missing day, invalid weekday or start time
#[utoipa::path(
    delete,
    path = "/api/slots/day",
    tag = SLOT_TAG,
    request_body = SlotTimesDto,
    responses(
        (status = 200, description = "Slots removed", body = SlotChangeDto),
        (status = 400, description = "Invalid day or start time", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn delete_for_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SlotTimesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    validate::required(&[("day", payload.day.as_deref())])?;
    let day = payload.day.unwrap_or_default();

    let deleted = slot_service(&state)
        .delete_for_day(&user.id, &payload.start_times, &day)
        .await?;

    Ok((StatusCode::OK, changed("Slots deleted successfully", deleted)))
}

#[utoipa::path(
    delete,
    path = "/api/slots/all-days",
    tag = SLOT_TAG,
    request_body = SlotTimesDto,
    responses(
        (status = 200, description = "Slots removed", body = SlotChangeDto),
        (status = 400, description = "Invalid start time", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn delete_for_all_days(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SlotTimesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let deleted = slot_service(&state)
        .delete_for_all_days(&user.id, &payload.start_times)
        .await?;

    Ok((StatusCode::OK, changed("Slots deleted successfully", deleted)))
}

/// Get the signed-in lawyer's slots, optionally for one weekday.
#[utoipa::path(
    get,
    path = "/api/slots/lawyer",
    tag = SLOT_TAG,
    params(
        ("day" = Option<String>, Query, description = "Weekday name, e.g. Monday")
    ),
    responses(
        (status = 200, description = "Slots of the lawyer", body = Vec<SlotDto>),
        (status = 400, description = "Invalid weekday", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_own(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SlotDayParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let service = slot_service(&state);
    let slots = match params.day.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(day) => service.get_by_day(&user.id, day).await?,
        None => service.get_all(&user.id).await?,
    };

    Ok((StatusCode::OK, slot_dtos(slots)))
}

/// Get the slots of a lawyer still bookable on a date.
///
/// Slots held by an active appointment that day are left out, as are slots
/// of today starting within the next hour.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Bookable slots ordered by start time
/// - `400 Bad Request` - Missing or malformed date, invalid lawyer ID
/// - `403 Forbidden` - Lawyer blocked or not verified
#[utoipa::path(
    get,
    path = "/api/slots/{lawyer_id}",
    tag = SLOT_TAG,
    params(
        ("lawyer_id" = String, Path, description = "Lawyer ID"),
        ("date" = String, Query, description = "Date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Bookable slots", body = Vec<SlotDto>),
        (status = 400, description = "Missing or malformed date", body = ErrorDto),
        (status = 403, description = "Lawyer not available", body = ErrorDto)
    ),
)]
pub async fn get_by_date(
    State(state): State<AppState>,
    Path(lawyer_id): Path<String>,
    Query(params): Query<SlotDateParams>,
) -> Result<impl IntoResponse, AppError> {
    validate::required(&[("date", params.date.as_deref())])?;
    let date = params.date.unwrap_or_default();

    let slots = slot_service(&state).get_by_date(&lawyer_id, &date).await?;

    Ok((StatusCode::OK, slot_dtos(slots)))
}
