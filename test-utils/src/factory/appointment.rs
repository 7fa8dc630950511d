use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_hex_id;

/// Factory for appointments.
///
/// Defaults to a confirmed video consultation tomorrow. The payment id is a fresh
/// id without a payment row; use `payment_id` to link an existing payment.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: String,
    lawyer_id: String,
    slot_id: String,
    date: NaiveDate,
    status: AppointmentStatus,
    payment_id: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> AppointmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, client_id: &str, lawyer_id: &str, slot_id: &str) -> Self {
        Self {
            db,
            client_id: client_id.to_string(),
            lawyer_id: lawyer_id.to_string(),
            slot_id: slot_id.to_string(),
            date: Utc::now().date_naive() + chrono::Duration::days(1),
            status: AppointmentStatus::Confirmed,
            payment_id: next_hex_id(),
            created_at: Utc::now(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = payment_id.into();
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            id: ActiveValue::Set(next_hex_id()),
            lawyer_id: ActiveValue::Set(self.lawyer_id),
            client_id: ActiveValue::Set(self.client_id),
            slot_id: ActiveValue::Set(self.slot_id),
            appointment_type: ActiveValue::Set(AppointmentType::VideoConsulting),
            appointment_date: ActiveValue::Set(self.date),
            reason: ActiveValue::Set("Property dispute consultation".to_string()),
            notes: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            payment_id: ActiveValue::Set(self.payment_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed appointment for tomorrow.
pub async fn create_appointment(
    db: &DatabaseConnection,
    client_id: &str,
    lawyer_id: &str,
    slot_id: &str,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, client_id, lawyer_id, slot_id)
        .build()
        .await
}
