use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LawyerDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub qualifications: Vec<String>,
    pub specialization: Option<String>,
    pub experience: Option<i32>,
    pub bar_number: Option<String>,
    pub office_address: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedLawyersDto {
    pub lawyers: Vec<LawyerDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
