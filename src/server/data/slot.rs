//! Slot data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::{Day, SlotStatus};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    model::slot::{CreateSlotParams, Slot},
    util::id::new_id,
};

pub struct SlotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the slots whose `(lawyer, day, start_time)` does not exist yet.
    ///
    /// # Arguments
    /// - `lawyer_id` - Owner of every slot in `params`
    /// - `params` - Candidate slots, may contain existing ones
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of slots inserted
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create_missing(
        &self,
        lawyer_id: &str,
        params: Vec<CreateSlotParams>,
    ) -> Result<u64, DbErr> {
        let existing = entity::prelude::Slot::find()
            .filter(entity::slot::Column::LawyerId.eq(lawyer_id))
            .all(self.db)
            .await?;

        let mut seen: Vec<(Day, String)> = existing
            .into_iter()
            .map(|slot| (slot.day, slot.start_time))
            .collect();

        let now = Utc::now();
        let mut models = Vec::new();
        for param in params {
            let key = (param.day, param.start_time.clone());
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            models.push(entity::slot::ActiveModel {
                id: ActiveValue::Set(new_id()),
                lawyer_id: ActiveValue::Set(param.lawyer_id),
                day: ActiveValue::Set(param.day),
                start_time: ActiveValue::Set(param.start_time),
                end_time: ActiveValue::Set(param.end_time),
                status: ActiveValue::Set(SlotStatus::Available),
                created_at: ActiveValue::Set(now),
            });
        }

        if models.is_empty() {
            return Ok(0);
        }

        let inserted = models.len() as u64;
        entity::prelude::Slot::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(inserted)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, DbErr> {
        let entity = entity::prelude::Slot::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Slot::from_entity))
    }

    /// Gets all slots of a lawyer ordered by weekday, then start time.
    pub async fn get_by_lawyer(&self, lawyer_id: &str) -> Result<Vec<Slot>, DbErr> {
        let entities = entity::prelude::Slot::find()
            .filter(entity::slot::Column::LawyerId.eq(lawyer_id))
            .all(self.db)
            .await?;

        let mut slots: Vec<Slot> = entities.into_iter().map(Slot::from_entity).collect();
        slots.sort_by_key(Slot::sort_key);

        Ok(slots)
    }

    /// Gets the slots of a lawyer on one weekday ordered by start time.
    pub async fn get_by_lawyer_and_day(
        &self,
        lawyer_id: &str,
        day: Day,
    ) -> Result<Vec<Slot>, DbErr> {
        let entities = entity::prelude::Slot::find()
            .filter(entity::slot::Column::LawyerId.eq(lawyer_id))
            .filter(entity::slot::Column::Day.eq(day))
            .all(self.db)
            .await?;

        let mut slots: Vec<Slot> = entities.into_iter().map(Slot::from_entity).collect();
        slots.sort_by_key(Slot::start);

        Ok(slots)
    }

    /// Finds the lawyer's slots on any of `days` starting at any of `start_times`.
    pub async fn find_matching(
        &self,
        lawyer_id: &str,
        days: &[Day],
        start_times: &[String],
    ) -> Result<Vec<Slot>, DbErr> {
        let entities = entity::prelude::Slot::find()
            .filter(entity::slot::Column::LawyerId.eq(lawyer_id))
            .filter(entity::slot::Column::Day.is_in(days.iter().copied()))
            .filter(entity::slot::Column::StartTime.is_in(start_times.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Slot::from_entity).collect())
    }

    /// Deletes slots by id and returns how many were removed.
    pub async fn delete_many(&self, ids: Vec<String>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Slot::delete_many()
            .filter(entity::slot::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_status(&self, id: &str, status: SlotStatus) -> Result<(), DbErr> {
        entity::prelude::Slot::update_many()
            .filter(entity::slot::Column::Id.eq(id))
            .col_expr(entity::slot::Column::Status, Expr::value(status))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
