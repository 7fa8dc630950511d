use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lawyer::Table)
                    .if_not_exists()
                    .col(string(Lawyer::Id).primary_key())
                    .col(string(Lawyer::Name))
                    .col(string_uniq(Lawyer::Email))
                    .col(string(Lawyer::Password))
                    .col(string_null(Lawyer::Phone))
                    .col(json(Lawyer::Qualifications))
                    .col(string_null(Lawyer::Specialization))
                    .col(integer_null(Lawyer::Experience))
                    .col(string_null(Lawyer::BarNumber))
                    .col(text_null(Lawyer::OfficeAddress))
                    .col(text_null(Lawyer::Bio))
                    .col(string_null(Lawyer::ProfileImage))
                    .col(boolean(Lawyer::IsVerified).default(false))
                    .col(boolean(Lawyer::IsBlocked).default(false))
                    .col(timestamp_with_time_zone(Lawyer::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Lawyer::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lawyer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lawyer {
    Table,
    Id,
    Name,
    Email,
    Password,
    Phone,
    Qualifications,
    Specialization,
    Experience,
    BarNumber,
    OfficeAddress,
    Bio,
    ProfileImage,
    IsVerified,
    IsBlocked,
    CreatedAt,
    UpdatedAt,
}
