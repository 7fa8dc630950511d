use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_hex_id;

/// Factory for payments attached to an appointment.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    appointment: entity::appointment::Model,
    status: PaymentStatus,
    transaction_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    /// Uses the appointment's `payment_id` as the payment id.
    pub fn new(db: &'a DatabaseConnection, appointment: &entity::appointment::Model) -> Self {
        Self {
            db,
            id: appointment.payment_id.clone(),
            appointment: appointment.clone(),
            status: PaymentStatus::Completed,
            transaction_id: Some(format!("pi_{}", next_hex_id())),
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn transaction_id(mut self, transaction_id: Option<&str>) -> Self {
        self.transaction_id = transaction_id.map(str::to_string);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::Set(self.id),
            appointment_id: ActiveValue::Set(self.appointment.id),
            client_id: ActiveValue::Set(self.appointment.client_id),
            order_id: ActiveValue::Set(Some(format!("cs_{}", next_hex_id()))),
            transaction_id: ActiveValue::Set(self.transaction_id),
            amount: ActiveValue::Set(300),
            currency: ActiveValue::Set("INR".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a completed payment for the appointment.
pub async fn create_payment(
    db: &DatabaseConnection,
    appointment: &entity::appointment::Model,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, appointment).build().await
}
