use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        client::PaginatedClientsDto,
        lawyer::PaginatedLawyersDto,
    },
    server::{
        controller::PaginationParams, error::AppError, middleware::auth::AuthGuard,
        model::account::Role, service::admin::AdminService, state::AppState,
    },
};

/// Tag for grouping account management endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct LawyerFilterParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Get all clients.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `params` - Pagination parameters (page, entries)
///
/// # Returns
/// - `200 OK` - Paginated clients, newest first
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/admin/client",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Clients", body = PaginatedClientsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let clients = AdminService::new(&state.db)
        .clients(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(clients.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/client/{id}/block",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client blocked", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto)
    ),
)]
pub async fn block_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    set_client_blocked(state, headers, id, true).await
}

#[utoipa::path(
    put,
    path = "/api/admin/client/{id}/unblock",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client unblocked", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto)
    ),
)]
pub async fn unblock_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    set_client_blocked(state, headers, id, false).await
}

async fn set_client_blocked(
    state: AppState,
    headers: HeaderMap,
    id: String,
    is_blocked: bool,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    AdminService::new(&state.db)
        .set_client_blocked(&id, is_blocked)
        .await?;

    let message = if is_blocked {
        "Client blocked successfully"
    } else {
        "Client unblocked successfully"
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

/// Get lawyers, optionally filtered by verification state.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Paginated lawyers, newest first
/// - `400 Bad Request` - Unknown `type` filter
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/admin/lawyer",
    tag = ADMIN_TAG,
    params(
        ("type" = Option<String>, Query, description = "verified, not-verified or blocked"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Lawyers", body = PaginatedLawyersDto),
        (status = 400, description = "Unknown filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_lawyers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<LawyerFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let lawyers = AdminService::new(&state.db)
        .lawyers(params.page, params.per_page(), filter.kind.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(lawyers.into_dto())))
}

/// Verify a lawyer so they can log in and be booked.
#[utoipa::path(
    put,
    path = "/api/admin/lawyer/{id}/verify",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Lawyer ID")),
    responses(
        (status = 200, description = "Lawyer verified", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Lawyer not found", body = ErrorDto)
    ),
)]
pub async fn verify_lawyer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    AdminService::new(&state.db).verify_lawyer(&id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Lawyer verified successfully"))))
}

#[utoipa::path(
    put,
    path = "/api/admin/lawyer/{id}/block",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Lawyer ID")),
    responses(
        (status = 200, description = "Lawyer blocked", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Lawyer not found", body = ErrorDto)
    ),
)]
pub async fn block_lawyer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    set_lawyer_blocked(state, headers, id, true).await
}

#[utoipa::path(
    put,
    path = "/api/admin/lawyer/{id}/unblock",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Lawyer ID")),
    responses(
        (status = 200, description = "Lawyer unblocked", body = MessageDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Lawyer not found", body = ErrorDto)
    ),
)]
pub async fn unblock_lawyer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    set_lawyer_blocked(state, headers, id, false).await
}

async fn set_lawyer_blocked(
    state: AppState,
    headers: HeaderMap,
    id: String,
    is_blocked: bool,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    AdminService::new(&state.db)
        .set_lawyer_blocked(&id, is_blocked)
        .await?;

    let message = if is_blocked {
        "Lawyer blocked successfully"
    } else {
        "Lawyer unblocked successfully"
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}
