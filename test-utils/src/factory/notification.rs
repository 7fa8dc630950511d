use chrono::Utc;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_hex_id;

/// Creates a notification addressed to a client, a lawyer, or both.
pub async fn create_notification(
    db: &DatabaseConnection,
    client_id: Option<&str>,
    lawyer_id: Option<&str>,
    kind: NotificationType,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        id: ActiveValue::Set(next_hex_id()),
        client_id: ActiveValue::Set(client_id.map(str::to_string)),
        lawyer_id: ActiveValue::Set(lawyer_id.map(str::to_string)),
        appointment_id: ActiveValue::Set(None),
        kind: ActiveValue::Set(kind),
        message: ActiveValue::Set("Test notification".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
