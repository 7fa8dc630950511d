use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(string(Notification::Id).primary_key())
                    .col(string_null(Notification::ClientId))
                    .col(string_null(Notification::LawyerId))
                    .col(string_null(Notification::AppointmentId))
                    .col(string_len(Notification::Kind, 32))
                    .col(text(Notification::Message))
                    .col(timestamp_with_time_zone(Notification::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    ClientId,
    LawyerId,
    AppointmentId,
    Kind,
    Message,
    CreatedAt,
}
