use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoSectionDto {
    pub id: String,
    pub appointment_id: String,
    pub lawyer_id: String,
    pub client_id: String,
    pub lawyer_name: String,
    pub client_name: String,
    pub lawyer_profile: Option<String>,
    pub client_profile: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub room_id: String,
    pub status: String,
}
