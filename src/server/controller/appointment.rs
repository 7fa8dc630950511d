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
        appointment::{
            AppointmentDetailsDto, AppointmentDto, CheckoutDto, CreateAppointmentDto,
            PaginatedAppointmentDetailsDto, UpdateAppointmentDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::{payment::PaymentError, AppError},
        middleware::auth::AuthGuard,
        model::{account::Role, appointment::Viewer},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Header carrying the payment provider's webhook signature.
const SIGNATURE_HEADER: &str = "stripe-signature";

#[derive(Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
}

fn appointment_service(state: &AppState) -> AppointmentService<'_> {
    AppointmentService::new(
        &state.db,
        &state.hub,
        state.gateway.as_ref(),
        &state.client_url,
    )
}

/// Book a slot and start the payment checkout.
///
/// Creates a pending appointment, payment and video section, then opens a
/// checkout session with the payment provider. The booking is confirmed once
/// the provider reports the payment through the webhook.
///
/// # Access Control
/// - `Client`
///
/// # Arguments
/// - `state` - Application state containing the database and payment gateway
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Lawyer, slot, date, type and reason of the consultation
///
/// # Returns
/// - `201 Created` - Checkout session to redirect the client to
/// - `400 Bad Request` - Missing field, past date or slot not on that weekday
/// - `403 Forbidden` - Lawyer blocked or not verified
/// - `404 Not Found` - Unknown lawyer or slot
/// - `409 Conflict` - Slot already booked on that date
/// - `502 Bad Gateway` - Payment provider failed
#[utoipa::path(
    post,
    path = "/api/appointments/client",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Checkout session created", body = CheckoutDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Lawyer not available", body = ErrorDto),
        (status = 404, description = "Lawyer or slot not found", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 502, description = "Payment provider failed", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let checkout = appointment_service(&state).book(&user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(checkout.into_dto())))
}

/// Get the signed-in client's appointments.
///
/// # Access Control
/// - `Client`
///
/// # Arguments
/// - `params` - Pagination parameters (page, entries)
/// - `filter` - Optional status filter
///
/// # Returns
/// - `200 OK` - Paginated appointments with lawyer and slot, newest first
/// - `400 Bad Request` - Unknown status
#[utoipa::path(
    get,
    path = "/api/appointments/client",
    tag = APPOINTMENT_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, confirmed, completed or cancelled"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Appointments of the client", body = PaginatedAppointmentDetailsDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_client_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<StatusFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let appointments = appointment_service(&state)
        .list_for_client(
            &user.id,
            params.page,
            params.per_page(),
            filter.status.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(appointments.into_dto())))
}

/// Cancel one of the signed-in client's appointments.
///
/// Clients may only set the status to `cancelled`, and only for appointments
/// that are neither completed nor already cancelled. A captured payment is
/// refunded.
///
/// # Access Control
/// - `Client` - Only their own appointments
///
/// # Returns
/// - `200 OK` - Cancelled appointment
/// - `400 Bad Request` - Missing field, other status or appointment already closed
/// - `403 Forbidden` - Appointment belongs to another client
/// - `404 Not Found` - Unknown appointment
#[utoipa::path(
    put,
    path = "/api/appointments/client",
    tag = APPOINTMENT_TAG,
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment cancelled", body = AppointmentDto),
        (status = 400, description = "Invalid status change", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the client's appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto)
    ),
)]
pub async fn cancel_client_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let appointment = appointment_service(&state)
        .cancel_by_client(&user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/appointments/client/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentDetailsDto),
        (status = 403, description = "Not the client's appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto)
    ),
)]
pub async fn get_client_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let details = appointment_service(&state)
        .details(&id, Viewer::Client(&user.id))
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Get the appointment paid with a payment, for the checkout success page.
#[utoipa::path(
    get,
    path = "/api/appointments/success/{payment_id}",
    tag = APPOINTMENT_TAG,
    params(("payment_id" = String, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentDetailsDto),
        (status = 403, description = "Payment belongs to another client", body = ErrorDto),
        (status = 404, description = "Payment or appointment not found", body = ErrorDto)
    ),
)]
pub async fn get_success_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Client])
        .await?;

    let details = appointment_service(&state)
        .success_details(&user.id, &payment_id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/appointments/lawyer",
    tag = APPOINTMENT_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, confirmed, completed or cancelled"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Appointments of the lawyer", body = PaginatedAppointmentDetailsDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_lawyer_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<StatusFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let appointments = appointment_service(&state)
        .list_for_lawyer(
            &user.id,
            params.page,
            params.per_page(),
            filter.status.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(appointments.into_dto())))
}

/// Change the status of one of the signed-in lawyer's appointments.
///
/// Cancelling notifies the client and refunds a captured payment. Completed
/// and cancelled appointments can no longer change.
///
/// # Access Control
/// - `Lawyer` - Only their own appointments
///
/// # Returns
/// - `200 OK` - Updated appointment
/// - `400 Bad Request` - Missing field, unknown status or appointment closed
/// - `403 Forbidden` - Appointment belongs to another lawyer
/// - `404 Not Found` - Unknown appointment
#[utoipa::path(
    put,
    path = "/api/appointments/lawyer",
    tag = APPOINTMENT_TAG,
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentDto),
        (status = 400, description = "Invalid status change", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the lawyer's appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto)
    ),
)]
pub async fn update_lawyer_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let appointment = appointment_service(&state)
        .update_status_by_lawyer(&user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/appointments/lawyer/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentDetailsDto),
        (status = 403, description = "Not the lawyer's appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto)
    ),
)]
pub async fn get_lawyer_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Lawyer])
        .await?;

    let details = appointment_service(&state)
        .details(&id, Viewer::Lawyer(&user.id))
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Receive payment events from the provider.
///
/// The raw body is needed to check the signature, so it is taken as a string
/// rather than parsed JSON. Events for unknown or already settled payments are
/// acknowledged without effect so the provider stops retrying them.
///
/// # Access Control
/// - Public, authenticated by the `Stripe-Signature` header
///
/// # Returns
/// - `200 OK` - Event accepted
/// - `400 Bad Request` - Missing or invalid signature, malformed event
#[utoipa::path(
    post,
    path = "/api/appointments/webhook",
    tag = APPOINTMENT_TAG,
    request_body(content = String, content_type = "application/json"),
    params(
        ("Stripe-Signature" = String, Header, description = "Webhook signature")
    ),
    responses(
        (status = 200, description = "Event accepted"),
        (status = 400, description = "Invalid signature or event", body = ErrorDto)
    ),
)]
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(PaymentError::InvalidSignature)?;

    appointment_service(&state)
        .handle_webhook(&body, signature)
        .await?;

    Ok((StatusCode::OK, Json(serde_json::json!({ "received": true }))))
}
