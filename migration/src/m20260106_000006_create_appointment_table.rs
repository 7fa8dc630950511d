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
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(string(Appointment::Id).primary_key())
                    .col(string(Appointment::LawyerId))
                    .col(string(Appointment::ClientId))
                    .col(string(Appointment::SlotId))
                    .col(string_len(Appointment::AppointmentType, 32))
                    .col(date(Appointment::AppointmentDate))
                    .col(text(Appointment::Reason))
                    .col(text_null(Appointment::Notes))
                    .col(string_len(Appointment::Status, 32))
                    .col(string(Appointment::PaymentId))
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_lawyer_id")
                            .from(Appointment::Table, Appointment::LawyerId)
                            .to(Lawyer::Table, Lawyer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_client_id")
                            .from(Appointment::Table, Appointment::ClientId)
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
                    .name("idx_appointment_slot_date")
                    .table(Appointment::Table)
                    .col(Appointment::SlotId)
                    .col(Appointment::AppointmentDate)
                    .to_owned(),
            )
            .await?;

        // One active booking per slot and date.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_appointment_active_slot_date \
                 ON appointment (slot_id, appointment_date) \
                 WHERE status IN ('payment-pending', 'pending', 'confirmed')",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    LawyerId,
    ClientId,
    SlotId,
    AppointmentType,
    AppointmentDate,
    Reason,
    Notes,
    Status,
    PaymentId,
    CreatedAt,
    UpdatedAt,
}
