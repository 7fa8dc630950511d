//! Notification data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::notification::{CreateNotificationParams, Notification, Recipient},
    util::id::new_id,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

fn owner_condition(recipient: Recipient<'_>) -> Condition {
    match recipient {
        Recipient::Client(id) => Condition::all().add(entity::notification::Column::ClientId.eq(id)),
        Recipient::Lawyer(id) => Condition::all().add(entity::notification::Column::LawyerId.eq(id)),
    }
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParams<'_>) -> Result<Notification, DbErr> {
        let (client_id, lawyer_id) = match param.recipient {
            Recipient::Client(id) => (Some(id.to_string()), None),
            Recipient::Lawyer(id) => (None, Some(id.to_string())),
        };

        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(new_id()),
            client_id: ActiveValue::Set(client_id),
            lawyer_id: ActiveValue::Set(lawyer_id),
            appointment_id: ActiveValue::Set(param.appointment_id.map(str::to_string)),
            kind: ActiveValue::Set(param.kind),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Notifications addressed to the recipient, newest first.
    pub async fn get_for(&self, recipient: Recipient<'_>) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(owner_condition(recipient))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Deletes the recipient's notifications among `ids`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_owned(
        &self,
        recipient: Recipient<'_>,
        ids: Vec<String>,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Notification::delete_many()
            .filter(owner_condition(recipient))
            .filter(entity::notification::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a notification of `kind` exists for the appointment.
    pub async fn exists_for_appointment(
        &self,
        appointment_id: &str,
        kind: NotificationType,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::AppointmentId.eq(appointment_id))
            .filter(entity::notification::Column::Kind.eq(kind))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
