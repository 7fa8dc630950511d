use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::ActiveEnum;

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub client_id: Option<String>,
    pub lawyer_id: Option<String>,
    pub appointment_id: Option<String>,
    pub kind: NotificationType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            lawyer_id: entity.lawyer_id,
            appointment_id: entity.appointment_id,
            kind: entity.kind,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    /// User the notification is addressed to.
    pub fn recipient_id(&self) -> Option<&str> {
        self.client_id.as_deref().or(self.lawyer_id.as_deref())
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            client_id: self.client_id,
            lawyer_id: self.lawyer_id,
            appointment_id: self.appointment_id,
            kind: self.kind.to_value(),
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Owner of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient<'a> {
    Client(&'a str),
    Lawyer(&'a str),
}

impl<'a> Recipient<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Recipient::Client(id) | Recipient::Lawyer(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams<'a> {
    pub recipient: Recipient<'a>,
    pub appointment_id: Option<&'a str>,
    pub kind: NotificationType,
    pub message: String,
}
