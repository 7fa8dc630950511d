//! Appointment domain models and booking parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType};
use sea_orm::ActiveEnum;

use crate::{
    model::appointment::{
        AppointmentDetailsDto, AppointmentDto, CheckoutDto, CreateAppointmentDto,
        PaginatedAppointmentDetailsDto, PaginatedAppointmentsDto,
    },
    server::{
        error::AppError,
        model::{client::Client, lawyer::Lawyer, pagination::Paginated, slot::Slot},
        util::validate,
    },
};

/// Statuses that hold a slot for their date.
pub const ACTIVE_STATUSES: [AppointmentStatus; 3] = [
    AppointmentStatus::PaymentPending,
    AppointmentStatus::Pending,
    AppointmentStatus::Confirmed,
];

/// Consultation fee charged at checkout, in major currency units.
pub const CONSULTATION_FEE: i64 = 300;
pub const CONSULTATION_CURRENCY: &str = "INR";

/// Lifetime of a hosted checkout session. Stripe refuses anything under 30 minutes.
pub const CHECKOUT_TIMEOUT_MINUTES: i64 = 31;

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: String,
    pub lawyer_id: String,
    pub client_id: String,
    pub slot_id: String,
    pub appointment_type: AppointmentType,
    pub appointment_date: NaiveDate,
    pub reason: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub payment_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            lawyer_id: entity.lawyer_id,
            client_id: entity.client_id,
            slot_id: entity.slot_id,
            appointment_type: entity.appointment_type,
            appointment_date: entity.appointment_date,
            reason: entity.reason,
            notes: entity.notes,
            status: entity.status,
            payment_id: entity.payment_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        ACTIVE_STATUSES.contains(&self.status)
    }

    /// Cancelled and completed appointments are final.
    pub fn is_closed(&self) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Cancelled | AppointmentStatus::Completed
        )
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            lawyer_id: self.lawyer_id,
            client_id: self.client_id,
            slot_id: self.slot_id,
            appointment_type: self.appointment_type.to_value(),
            appointment_date: self.appointment_date,
            reason: self.reason,
            notes: self.notes,
            status: self.status.to_value(),
            payment_id: self.payment_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Paginated<Appointment> {
    pub fn into_dto(self) -> PaginatedAppointmentsDto {
        PaginatedAppointmentsDto {
            appointments: self.items.into_iter().map(Appointment::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Appointment joined with its slot and participant profiles.
#[derive(Debug, Clone)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub slot: Option<Slot>,
    pub lawyer: Lawyer,
    pub client: Client,
}

impl AppointmentDetails {
    pub fn into_dto(self) -> AppointmentDetailsDto {
        AppointmentDetailsDto {
            appointment: self.appointment.into_dto(),
            slot: self.slot.map(Slot::into_dto),
            lawyer: self.lawyer.into_dto(),
            client: self.client.into_dto(),
        }
    }
}

impl Paginated<AppointmentDetails> {
    pub fn into_dto(self) -> PaginatedAppointmentDetailsDto {
        PaginatedAppointmentDetailsDto {
            appointments: self
                .items
                .into_iter()
                .map(AppointmentDetails::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Validated booking request.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub lawyer_id: String,
    pub slot_id: String,
    pub date: NaiveDate,
    pub appointment_type: AppointmentType,
    pub reason: String,
    pub notes: Option<String>,
}

impl CreateAppointmentParams {
    /// Validates the booking request against `today`.
    ///
    /// # Returns
    /// - `Ok(CreateAppointmentParams)` - Request is well-formed
    /// - `Err(AppError::BadRequest)` - Missing field, bad id, unknown type, past
    ///   date or text outside its length bounds
    pub fn from_dto(dto: CreateAppointmentDto, today: NaiveDate) -> Result<Self, AppError> {
        validate::required(&[
            ("lawyer_id", dto.lawyer_id.as_deref()),
            ("slot_id", dto.slot_id.as_deref()),
            ("date", dto.date.as_deref()),
            ("appointment_type", dto.appointment_type.as_deref()),
            ("reason", dto.reason.as_deref()),
        ])?;

        let lawyer_id = dto.lawyer_id.unwrap_or_default();
        let slot_id = dto.slot_id.unwrap_or_default();
        validate::ids(&[&lawyer_id, &slot_id])?;

        let appointment_type = validate::one_of::<AppointmentType>(
            "appointment_type",
            dto.appointment_type.as_deref().unwrap_or_default(),
        )?;

        let date = validate::date(dto.date.as_deref().unwrap_or_default())?;
        if date < today {
            return Err(AppError::BadRequest(
                "Appointment date cannot be in the past".to_string(),
            ));
        }

        let reason = dto.reason.unwrap_or_default().trim().to_string();
        validate::length("reason", &reason, 1, 500)?;

        let notes = dto
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(notes) = &notes {
            validate::length("notes", notes, 0, 500)?;
        }

        Ok(Self {
            lawyer_id,
            slot_id,
            date,
            appointment_type,
            reason,
            notes,
        })
    }
}

/// Rows written by the booking transaction.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub appointment_id: String,
    pub payment_id: String,
    pub checkout_session_id: String,
    pub client: Client,
    pub lawyer: Lawyer,
    pub slot: Slot,
    pub params: CreateAppointmentParams,
    pub session_start: DateTime<Utc>,
    pub session_end: DateTime<Utc>,
    pub room_id: String,
}

/// Hosted checkout created for a booking.
#[derive(Debug, Clone)]
pub struct BookingCheckout {
    pub session_id: String,
    pub checkout_url: String,
}

impl BookingCheckout {
    pub fn into_dto(self) -> CheckoutDto {
        CheckoutDto {
            session_id: self.session_id,
            checkout_url: self.checkout_url,
        }
    }
}

/// Who is reading an appointment or video section.
#[derive(Debug, Clone, Copy)]
pub enum Viewer<'a> {
    Client(&'a str),
    Lawyer(&'a str),
    Admin,
}

impl Viewer<'_> {
    pub fn may_view(&self, lawyer_id: &str, client_id: &str) -> bool {
        match self {
            Viewer::Client(id) => *id == client_id,
            Viewer::Lawyer(id) => *id == lawyer_id,
            Viewer::Admin => true,
        }
    }
}
