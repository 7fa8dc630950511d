use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::Day;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, slot::SlotRepository},
    error::AppError,
    model::slot::{CreateSlotParams, Slot},
    realtime::RealtimeHub,
    service::{
        appointment::{AppointmentService, CancelReason},
        payment::PaymentGateway,
    },
    util::{
        time::{day_of, session_start, slot_end_time, ALL_DAYS, SAME_DAY_LEAD_MINUTES},
        validate,
    },
};

pub struct SlotService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a RealtimeHub,
    gateway: &'a dyn PaymentGateway,
    client_url: &'a str,
}

impl<'a> SlotService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        hub: &'a RealtimeHub,
        gateway: &'a dyn PaymentGateway,
        client_url: &'a str,
    ) -> Self {
        Self {
            db,
            hub,
            gateway,
            client_url,
        }
    }

    /// Adds the given start times on one weekday, skipping existing ones.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of slots created
    /// - `Err(AppError::BadRequest)` - Invalid id, day or start time
    pub async fn create_for_day(
        &self,
        lawyer_id: &str,
        start_times: &[String],
        day: &str,
    ) -> Result<u64, AppError> {
        let day = validate::one_of::<Day>("day", day)?;
        self.create(lawyer_id, start_times, &[day]).await
    }

    /// Adds the given start times on every weekday.
    pub async fn create_for_all_days(
        &self,
        lawyer_id: &str,
        start_times: &[String],
    ) -> Result<u64, AppError> {
        self.create(lawyer_id, start_times, &ALL_DAYS).await
    }

    /// Removes the given start times on one weekday.
    ///
    /// Active appointments on the removed slots are cancelled and refunded first.
    pub async fn delete_for_day(
        &self,
        lawyer_id: &str,
        start_times: &[String],
        day: &str,
    ) -> Result<u64, AppError> {
        let day = validate::one_of::<Day>("day", day)?;
        self.delete(lawyer_id, start_times, &[day]).await
    }

    pub async fn delete_for_all_days(
        &self,
        lawyer_id: &str,
        start_times: &[String],
    ) -> Result<u64, AppError> {
        self.delete(lawyer_id, start_times, &ALL_DAYS).await
    }

    /// All slots of a lawyer ordered by weekday, then start time.
    pub async fn get_all(&self, lawyer_id: &str) -> Result<Vec<Slot>, AppError> {
        validate::id(lawyer_id)?;
        Ok(SlotRepository::new(self.db).get_by_lawyer(lawyer_id).await?)
    }

    pub async fn get_by_day(&self, lawyer_id: &str, day: &str) -> Result<Vec<Slot>, AppError> {
        validate::id(lawyer_id)?;
        let day = validate::one_of::<Day>("day", day)?;

        Ok(SlotRepository::new(self.db)
            .get_by_lawyer_and_day(lawyer_id, day)
            .await?)
    }

    /// Slots still bookable on `date`, earliest first.
    pub async fn get_by_date(&self, lawyer_id: &str, date: &str) -> Result<Vec<Slot>, AppError> {
        self.get_by_date_at(lawyer_id, date, Utc::now()).await
    }

    /// Same as `get_by_date` with an explicit current instant.
    ///
    /// Excludes slots held by an active appointment on that date and, for today,
    /// slots starting within the next hour.
    pub async fn get_by_date_at(
        &self,
        lawyer_id: &str,
        date: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Slot>, AppError> {
        validate::id(lawyer_id)?;
        let date = validate::date(date)?;

        let taken = AppointmentRepository::new(self.db)
            .taken_slot_ids_on(lawyer_id, date)
            .await?;
        let slots = SlotRepository::new(self.db)
            .get_by_lawyer_and_day(lawyer_id, day_of(date))
            .await?;

        let earliest = now + Duration::minutes(SAME_DAY_LEAD_MINUTES);
        let is_today = date == now.date_naive();

        let slots = slots
            .into_iter()
            .filter(|slot| !taken.contains(&slot.id))
            .filter(|slot| {
                !is_today
                    || session_start(date, &slot.start_time).is_ok_and(|start| start > earliest)
            })
            .collect();

        Ok(slots)
    }

    async fn create(
        &self,
        lawyer_id: &str,
        start_times: &[String],
        days: &[Day],
    ) -> Result<u64, AppError> {
        validate::id(lawyer_id)?;
        let start_times = validate_start_times(start_times)?;

        let mut params = Vec::with_capacity(start_times.len() * days.len());
        for start_time in &start_times {
            let end_time = slot_end_time(start_time)?;
            for day in days {
                params.push(CreateSlotParams {
                    lawyer_id: lawyer_id.to_string(),
                    day: *day,
                    start_time: start_time.clone(),
                    end_time: end_time.clone(),
                });
            }
        }

        let created = SlotRepository::new(self.db)
            .create_missing(lawyer_id, params)
            .await?;

        tracing::info!("Lawyer {} added {} slots", lawyer_id, created);

        Ok(created)
    }

    async fn delete(
        &self,
        lawyer_id: &str,
        start_times: &[String],
        days: &[Day],
    ) -> Result<u64, AppError> {
        validate::id(lawyer_id)?;
        let start_times = validate_start_times(start_times)?;

        let slots = SlotRepository::new(self.db);
        let slot_ids: Vec<String> = slots
            .find_matching(lawyer_id, days, &start_times)
            .await?
            .into_iter()
            .map(|slot| slot.id)
            .collect();
        if slot_ids.is_empty() {
            return Ok(0);
        }

        let affected = AppointmentRepository::new(self.db)
            .get_active_for_slots(slot_ids.clone())
            .await?;

        let appointments =
            AppointmentService::new(self.db, self.hub, self.gateway, self.client_url);
        for appointment in affected {
            appointments
                .cancel(appointment, None, CancelReason::LawyerUnavailable)
                .await?;
        }

        let deleted = slots.delete_many(slot_ids).await?;

        tracing::info!("Lawyer {} removed {} slots", lawyer_id, deleted);

        Ok(deleted)
    }
}

/// Checks a non-empty list of `HH:MM AM|PM` start times, returning them trimmed.
pub fn validate_start_times(start_times: &[String]) -> Result<Vec<String>, AppError> {
    if start_times.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required fields: start_times".to_string(),
        ));
    }

    start_times
        .iter()
        .map(|time| {
            let time = time.trim();
            validate::time(time)?;
            Ok(time.to_string())
        })
        .collect()
}
