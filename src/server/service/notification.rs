use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, Recipient},
    realtime::{RealtimeHub, ServerEvent},
    util::validate,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a RealtimeHub,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a RealtimeHub) -> Self {
        Self { db, hub }
    }

    /// Stores a notification and pushes it to the recipient if they are connected.
    pub async fn create(
        &self,
        params: CreateNotificationParams<'_>,
    ) -> Result<Notification, AppError> {
        let recipient = params.recipient.id().to_string();
        let notification = NotificationRepository::new(self.db).create(params).await?;

        self.hub
            .publish(
                &recipient,
                ServerEvent::Notification {
                    notification: notification.clone().into_dto(),
                },
            )
            .await;

        Ok(notification)
    }

    /// Notifications of the recipient, newest first.
    pub async fn list(&self, recipient: Recipient<'_>) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db).get_for(recipient).await?)
    }

    /// Deletes one notification owned by the caller.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::BadRequest)` - Malformed id
    /// - `Err(AppError::NotFound)` - No such notification for the caller
    pub async fn clear_one(&self, owner: Recipient<'_>, id: &str) -> Result<(), AppError> {
        validate::id(id)?;

        let deleted = NotificationRepository::new(self.db)
            .delete_owned(owner, vec![id.to_string()])
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        self.hub
            .publish(
                owner.id(),
                ServerEvent::NotificationCleared {
                    ids: vec![id.to_string()],
                },
            )
            .await;

        Ok(())
    }

    /// Deletes the caller's notifications among `ids`, returning how many were removed.
    pub async fn clear_all(&self, owner: Recipient<'_>, ids: Vec<String>) -> Result<u64, AppError> {
        validate::ids(&ids)?;

        let deleted = NotificationRepository::new(self.db)
            .delete_owned(owner, ids.clone())
            .await?;

        if deleted > 0 {
            self.hub
                .publish(owner.id(), ServerEvent::NotificationCleared { ids })
                .await;
        }

        Ok(deleted)
    }
}
