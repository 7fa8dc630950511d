use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LegalHistoryDto {
    pub id: String,
    pub client_id: String,
    pub lawyer_id: String,
    pub title: String,
    pub case_type: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: String,
    pub documents: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLegalHistoryDto {
    pub client_id: Option<String>,
    pub title: Option<String>,
    pub case_type: Option<String>,
    pub description: Option<String>,
    /// ISO date the case event happened.
    pub date: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedLegalHistoryDto {
    pub records: Vec<LegalHistoryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
