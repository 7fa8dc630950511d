use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{client::ClientDto, lawyer::LawyerDto, slot::SlotDto};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    pub lawyer_id: Option<String>,
    pub slot_id: Option<String>,
    /// ISO date of the consultation.
    pub date: Option<String>,
    /// `video-consulting` or `in-person`.
    pub appointment_type: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// Hosted checkout the client is redirected to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutDto {
    pub session_id: String,
    pub checkout_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: String,
    pub lawyer_id: String,
    pub client_id: String,
    pub slot_id: String,
    pub appointment_type: String,
    pub appointment_date: NaiveDate,
    pub reason: String,
    pub notes: Option<String>,
    pub status: String,
    pub payment_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDetailsDto {
    pub appointment: AppointmentDto,
    /// Absent when the lawyer has since removed the slot.
    pub slot: Option<SlotDto>,
    pub lawyer: LawyerDto,
    pub client: ClientDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAppointmentsDto {
    pub appointments: Vec<AppointmentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAppointmentDetailsDto {
    pub appointments: Vec<AppointmentDetailsDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAppointmentDto {
    pub appointment_id: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
