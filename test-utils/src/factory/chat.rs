use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_hex_id;

/// Creates a chat between the lawyer and the client.
pub async fn create_chat(
    db: &DatabaseConnection,
    lawyer: &entity::lawyer::Model,
    client: &entity::client::Model,
) -> Result<entity::chat::Model, DbErr> {
    let now = Utc::now();
    entity::chat::ActiveModel {
        id: ActiveValue::Set(next_hex_id()),
        lawyer_id: ActiveValue::Set(lawyer.id.clone()),
        client_id: ActiveValue::Set(client.id.clone()),
        lawyer_name: ActiveValue::Set(lawyer.name.clone()),
        client_name: ActiveValue::Set(client.name.clone()),
        lawyer_profile: ActiveValue::Set(lawyer.profile_image.clone()),
        client_profile: ActiveValue::Set(client.profile_image.clone()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates an unreceived message in the chat.
pub async fn create_message(
    db: &DatabaseConnection,
    chat_id: &str,
    sender_id: &str,
    receiver_id: &str,
    text: &str,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        chat_id: ActiveValue::Set(chat_id.to_string()),
        sender_id: ActiveValue::Set(sender_id.to_string()),
        receiver_id: ActiveValue::Set(receiver_id.to_string()),
        message: ActiveValue::Set(text.to_string()),
        is_received: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
