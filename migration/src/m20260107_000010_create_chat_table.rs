use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_client_table::Client, m20260105_000003_create_lawyer_table::Lawyer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chat::Table)
                    .if_not_exists()
                    .col(string(Chat::Id).primary_key())
                    .col(string(Chat::LawyerId))
                    .col(string(Chat::ClientId))
                    .col(string(Chat::LawyerName))
                    .col(string(Chat::ClientName))
                    .col(string_null(Chat::LawyerProfile))
                    .col(string_null(Chat::ClientProfile))
                    .col(timestamp_with_time_zone(Chat::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Chat::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_lawyer_id")
                            .from(Chat::Table, Chat::LawyerId)
                            .to(Lawyer::Table, Lawyer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_client_id")
                            .from(Chat::Table, Chat::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chat_lawyer_client")
                    .table(Chat::Table)
                    .col(Chat::LawyerId)
                    .col(Chat::ClientId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chat {
    Table,
    Id,
    LawyerId,
    ClientId,
    LawyerName,
    ClientName,
    LawyerProfile,
    ClientProfile,
    CreatedAt,
    UpdatedAt,
}
