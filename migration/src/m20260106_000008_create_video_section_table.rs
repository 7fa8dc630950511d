use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000006_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VideoSection::Table)
                    .if_not_exists()
                    .col(string(VideoSection::Id).primary_key())
                    .col(string(VideoSection::AppointmentId))
                    .col(string(VideoSection::LawyerId))
                    .col(string(VideoSection::ClientId))
                    .col(string(VideoSection::LawyerName))
                    .col(string(VideoSection::ClientName))
                    .col(string_null(VideoSection::LawyerProfile))
                    .col(string_null(VideoSection::ClientProfile))
                    .col(timestamp_with_time_zone(VideoSection::StartTime))
                    .col(timestamp_with_time_zone(VideoSection::EndTime))
                    .col(string_uniq(VideoSection::RoomId))
                    .col(string_len(VideoSection::Status, 16))
                    .col(timestamp_with_time_zone(VideoSection::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_section_appointment_id")
                            .from(VideoSection::Table, VideoSection::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VideoSection {
    Table,
    Id,
    AppointmentId,
    LawyerId,
    ClientId,
    LawyerName,
    ClientName,
    LawyerProfile,
    ClientProfile,
    StartTime,
    EndTime,
    RoomId,
    Status,
    CreatedAt,
}
