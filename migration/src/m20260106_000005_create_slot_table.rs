use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_lawyer_table::Lawyer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slot::Table)
                    .if_not_exists()
                    .col(string(Slot::Id).primary_key())
                    .col(string(Slot::LawyerId))
                    .col(string_len(Slot::Day, 16))
                    .col(string_len(Slot::StartTime, 11))
                    .col(string_len(Slot::EndTime, 11))
                    .col(string_len(Slot::Status, 16).default("available"))
                    .col(timestamp_with_time_zone(Slot::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_slot_lawyer_id")
                            .from(Slot::Table, Slot::LawyerId)
                            .to(Lawyer::Table, Lawyer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_slot_lawyer_day_start")
                    .table(Slot::Table)
                    .col(Slot::LawyerId)
                    .col(Slot::Day)
                    .col(Slot::StartTime)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Slot {
    Table,
    Id,
    LawyerId,
    Day,
    StartTime,
    EndTime,
    Status,
    CreatedAt,
}
