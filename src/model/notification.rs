use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: String,
    pub client_id: Option<String>,
    pub lawyer_id: Option<String>,
    pub appointment_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClearNotificationsDto {
    #[serde(default)]
    pub ids: Vec<String>,
}
