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
                    .table(LegalHistory::Table)
                    .if_not_exists()
                    .col(string(LegalHistory::Id).primary_key())
                    .col(string(LegalHistory::ClientId))
                    .col(string(LegalHistory::LawyerId))
                    .col(string(LegalHistory::Title))
                    .col(string(LegalHistory::CaseType))
                    .col(text(LegalHistory::Description))
                    .col(date(LegalHistory::Date))
                    .col(string(LegalHistory::Status))
                    .col(json(LegalHistory::Documents))
                    .col(timestamp_with_time_zone(LegalHistory::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(LegalHistory::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_legal_history_client_id")
                            .from(LegalHistory::Table, LegalHistory::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_legal_history_lawyer_id")
                            .from(LegalHistory::Table, LegalHistory::LawyerId)
                            .to(Lawyer::Table, Lawyer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LegalHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LegalHistory {
    Table,
    Id,
    ClientId,
    LawyerId,
    Title,
    CaseType,
    Description,
    Date,
    Status,
    Documents,
    CreatedAt,
    UpdatedAt,
}
