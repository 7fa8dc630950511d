use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000010_create_chat_table::Chat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(string(Message::ChatId))
                    .col(string(Message::SenderId))
                    .col(string(Message::ReceiverId))
                    .col(text(Message::Message))
                    .col(boolean(Message::IsReceived).default(false))
                    .col(timestamp_with_time_zone(Message::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_chat_id")
                            .from(Message::Table, Message::ChatId)
                            .to(Chat::Table, Chat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    ChatId,
    SenderId,
    ReceiverId,
    Message,
    IsReceived,
    CreatedAt,
}
