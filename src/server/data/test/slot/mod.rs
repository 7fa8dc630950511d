use crate::server::{data::slot::SlotRepository, model::slot::CreateSlotParams};
use entity::sea_orm_active_enums::{Day, SlotStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::slot::SlotFactory};

mod create_missing;
mod delete_many;
mod find_matching;
mod get_by_lawyer;

fn slot_params(lawyer_id: &str, day: Day, start: &str, end: &str) -> CreateSlotParams {
    CreateSlotParams {
        lawyer_id: lawyer_id.to_string(),
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}
