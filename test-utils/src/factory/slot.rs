use chrono::Utc;
use entity::sea_orm_active_enums::{Day, SlotStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_hex_id;

/// Factory for lawyer slots.
///
/// Defaults to an available `10:00 AM` slot on tomorrow's weekday.
pub struct SlotFactory<'a> {
    db: &'a DatabaseConnection,
    lawyer_id: String,
    day: Day,
    start_time: String,
    end_time: String,
    status: SlotStatus,
}

impl<'a> SlotFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, lawyer_id: &str) -> Self {
        Self {
            db,
            lawyer_id: lawyer_id.to_string(),
            day: day_of(Utc::now().date_naive() + chrono::Duration::days(1)),
            start_time: "10:00 AM".to_string(),
            end_time: "11:00 AM".to_string(),
            status: SlotStatus::Available,
        }
    }

    pub fn day(mut self, day: Day) -> Self {
        self.day = day;
        self
    }

    pub fn time(mut self, start_time: &str, end_time: &str) -> Self {
        self.start_time = start_time.to_string();
        self.end_time = end_time.to_string();
        self
    }

    pub fn status(mut self, status: SlotStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::slot::Model, DbErr> {
        entity::slot::ActiveModel {
            id: ActiveValue::Set(next_hex_id()),
            lawyer_id: ActiveValue::Set(self.lawyer_id),
            day: ActiveValue::Set(self.day),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Weekday of `date` as stored on slots.
pub fn day_of(date: chrono::NaiveDate) -> Day {
    use chrono::Datelike;

    match date.weekday() {
        chrono::Weekday::Sun => Day::Sunday,
        chrono::Weekday::Mon => Day::Monday,
        chrono::Weekday::Tue => Day::Tuesday,
        chrono::Weekday::Wed => Day::Wednesday,
        chrono::Weekday::Thu => Day::Thursday,
        chrono::Weekday::Fri => Day::Friday,
        chrono::Weekday::Sat => Day::Saturday,
    }
}

/// Creates an available `10:00 AM` slot on tomorrow's weekday.
pub async fn create_slot(
    db: &DatabaseConnection,
    lawyer_id: &str,
) -> Result<entity::slot::Model, DbErr> {
    SlotFactory::new(db, lawyer_id).build().await
}
