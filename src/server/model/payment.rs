use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PaymentStatus;

use crate::server::model::appointment::Appointment;

#[derive(Debug, Clone)]
pub struct Payment {
    pub id: String,
    pub appointment_id: String,
    pub client_id: String,
    /// Checkout session id.
    pub order_id: Option<String>,
    pub transaction_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            appointment_id: entity.appointment_id,
            client_id: entity.client_id,
            order_id: entity.order_id,
            transaction_id: entity.transaction_id,
            amount: entity.amount,
            currency: entity.currency,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    /// Transaction to refund, present only for captured payments.
    pub fn refundable_transaction(&self) -> Option<&str> {
        match self.status {
            PaymentStatus::Completed => self.transaction_id.as_deref(),
            _ => None,
        }
    }
}

/// Outcome of recording a capture reported by the payment provider.
#[derive(Debug, Clone)]
pub enum PaymentCapture {
    /// The booking was awaiting payment and is now confirmed.
    Confirmed(Appointment),
    /// The booking was closed before the money arrived; the capture must be refunded.
    Closed(Appointment),
    /// The payment was already settled or no booking references it.
    Ignored,
}
