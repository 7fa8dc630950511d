use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlotDto {
    pub id: String,
    pub lawyer_id: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

/// Start times to add or remove, for one weekday or for every day.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SlotTimesDto {
    #[serde(default)]
    pub start_times: Vec<String>,
    /// Weekday name, required by the single-day endpoints.
    pub day: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlotChangeDto {
    pub message: String,
    pub affected: u64,
}
