use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(string(Client::Id).primary_key())
                    .col(string(Client::Name))
                    .col(string_uniq(Client::Email))
                    .col(string_null(Client::Password))
                    .col(string_null(Client::Phone))
                    .col(text_null(Client::Address))
                    .col(string_null(Client::Occupation))
                    .col(string_null(Client::Gender))
                    .col(date_null(Client::BirthDate))
                    .col(string_null(Client::ProfileImage))
                    .col(boolean(Client::IsVerified).default(false))
                    .col(boolean(Client::IsBlocked).default(false))
                    .col(timestamp_with_time_zone(Client::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Client::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    Name,
    Email,
    Password,
    Phone,
    Address,
    Occupation,
    Gender,
    BirthDate,
    ProfileImage,
    IsVerified,
    IsBlocked,
    CreatedAt,
    UpdatedAt,
}
