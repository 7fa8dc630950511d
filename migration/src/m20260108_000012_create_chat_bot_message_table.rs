use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_client_table::Client;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatBotMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatBotMessage::Id))
                    .col(string(ChatBotMessage::ClientId))
                    .col(string_len(ChatBotMessage::Role, 8))
                    .col(text(ChatBotMessage::Message))
                    .col(timestamp_with_time_zone(ChatBotMessage::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_bot_message_client_id")
                            .from(ChatBotMessage::Table, ChatBotMessage::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatBotMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatBotMessage {
    Table,
    Id,
    ClientId,
    Role,
    Message,
    CreatedAt,
}
