use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedClientsDto {
    pub clients: Vec<ClientDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateClientProfileDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub gender: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    pub birth_date: Option<String>,
}

/// Object storage key of an uploaded image.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProfileImageDto {
    pub key: Option<String>,
}
