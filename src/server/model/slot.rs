use chrono::NaiveTime;
use entity::sea_orm_active_enums::{Day, SlotStatus};
use sea_orm::ActiveEnum;

use crate::{
    model::slot::SlotDto,
    server::util::time::{day_index, parse_slot_time},
};

#[derive(Debug, Clone)]
pub struct Slot {
    pub id: String,
    pub lawyer_id: String,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
    pub status: SlotStatus,
}

impl Slot {
    pub fn from_entity(entity: entity::slot::Model) -> Self {
        Self {
            id: entity.id,
            lawyer_id: entity.lawyer_id,
            day: entity.day,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status,
        }
    }

    /// Start as a time of day; unparseable values sort first.
    pub fn start(&self) -> NaiveTime {
        parse_slot_time(&self.start_time).unwrap_or(NaiveTime::MIN)
    }

    /// Orders slots by weekday, then by start time.
    pub fn sort_key(&self) -> (usize, NaiveTime) {
        (day_index(self.day), self.start())
    }

    pub fn into_dto(self) -> SlotDto {
        SlotDto {
            id: self.id,
            lawyer_id: self.lawyer_id,
            day: self.day.to_value(),
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status.to_value(),
        }
    }
}

/// New slot row, end time already computed.
#[derive(Debug, Clone)]
pub struct CreateSlotParams {
    pub lawyer_id: String,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
}
