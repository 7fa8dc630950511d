use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(string(Payment::Id).primary_key())
                    .col(string(Payment::AppointmentId))
                    .col(string(Payment::ClientId))
                    .col(string_null(Payment::OrderId))
                    .col(string_null(Payment::TransactionId))
                    .col(big_integer(Payment::Amount))
                    .col(string_len(Payment::Currency, 8))
                    .col(string_len(Payment::Status, 16))
                    .col(timestamp_with_time_zone(Payment::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Payment::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    AppointmentId,
    ClientId,
    OrderId,
    TransactionId,
    Amount,
    Currency,
    Status,
    CreatedAt,
    UpdatedAt,
}
