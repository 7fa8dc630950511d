use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::PaginatedAppointmentDetailsDto,
        client::{PaginatedClientsDto, ProfileImageDto},
        lawyer::LawyerDto,
        legal_history::{CreateLegalHistoryDto, LegalHistoryDto, PaginatedLegalHistoryDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::account::Role,
        service::{
            admin::AdminService, appointment::AppointmentService,
            legal_history::LegalHistoryService, profile::ProfileService,
        },
        state::AppState,
    },
};

/// Tag for grouping lawyer endpoints in OpenAPI documentation
pub static LAWYER_TAG: &str = "lawyer";

/// List lawyers visitors can book.
///
/// Only verified, unblocked lawyers are listed. Password hashes never leave
/// the server.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/lawyers",
    tag = LAWYER_TAG,
    responses(
        (status = 200, description = "Bookable lawyers", body = Vec<LawyerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_lawyers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let lawyers = AdminService::new(&state.db).public_lawyers().await?;

    let dtos: Vec<LawyerDto> = lawyers.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/lawyer/profile-image",
    tag = LAWYER_TAG,
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
        .require(&[Role::Lawyer])
        .await?;

    ProfileService::new(&state.db, &state.storage_url)
        .update_lawyer_image(&user.id, payload.key.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Profile image updated successfully")),
    ))
}

/// Get the clients who booked the signed-in lawyer.
///
/// # Access Control
/// - `Lawyer`
///
/// # Arguments
/// - `params` - Pagination parameters (page, entries)
///
/// # Returns
/// - `200 OK` - Paginated clients, each listed once
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/lawyer/clients",
    tag = LAWYER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Clients of the lawyer", body = PaginatedClientsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let clients = AppointmentService::new(
        &state.db,
        &state.hub,
        state.gateway.as_ref(),
        &state.client_url,
    )
    .clients_of_lawyer(&user.id, params.page, params.per_page())
    .await?;

    Ok((StatusCode::OK, Json(clients.into_dto())))
}

/// Get every appointment of a client, whichever lawyer it was booked with.
///
/// # Access Control
/// - `Lawyer`
#[utoipa::path(
    get,
    path = "/api/lawyer/case-history/{client_id}",
    tag = LAWYER_TAG,
    params(
        ("client_id" = String, Path, description = "Client ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Appointments of the client", body = PaginatedAppointmentDetailsDto),
        (status = 400, description = "Invalid client ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_case_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(client_id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let history = AppointmentService::new(
        &state.db,
        &state.hub,
        state.gateway.as_ref(),
        &state.client_url,
    )
    .history_of_client(&client_id, params.page, params.per_page())
    .await?;

    Ok((StatusCode::OK, Json(history.into_dto())))
}

/// Record a legal case for a client.
///
/// # Access Control
/// - `Lawyer` - Recorded as the case's lawyer
///
/// # Returns
/// - `201 Created` - Stored record
/// - `400 Bad Request` - Missing field, invalid date or status
/// - `404 Not Found` - Unknown client
#[utoipa::path(
    post,
    path = "/api/lawyer/legal-history",
    tag = LAWYER_TAG,
    request_body = CreateLegalHistoryDto,
    responses(
        (status = 201, description = "Legal history recorded", body = LegalHistoryDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto)
    ),
)]
pub async fn create_legal_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLegalHistoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let record = LegalHistoryService::new(&state.db)
        .create(&user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/lawyer/legal-history/{client_id}",
    tag = LAWYER_TAG,
    params(
        ("client_id" = String, Path, description = "Client ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Legal history of the client", body = PaginatedLegalHistoryDto),
        (status = 400, description = "Invalid client ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_legal_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(client_id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let records = LegalHistoryService::new(&state.db)
        .list_for_client(&client_id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(records.into_dto())))
}
