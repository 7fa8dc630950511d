pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_admin_table;
mod m20260105_000002_create_client_table;
mod m20260105_000003_create_lawyer_table;
mod m20260105_000004_create_otp_table;
mod m20260106_000005_create_slot_table;
mod m20260106_000006_create_appointment_table;
mod m20260106_000007_create_payment_table;
mod m20260106_000008_create_video_section_table;
mod m20260107_000009_create_notification_table;
mod m20260107_000010_create_chat_table;
mod m20260107_000011_create_message_table;
mod m20260108_000012_create_chat_bot_message_table;
mod m20260108_000013_create_legal_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_admin_table::Migration),
            Box::new(m20260105_000002_create_client_table::Migration),
            Box::new(m20260105_000003_create_lawyer_table::Migration),
            Box::new(m20260105_000004_create_otp_table::Migration),
            Box::new(m20260106_000005_create_slot_table::Migration),
            Box::new(m20260106_000006_create_appointment_table::Migration),
            Box::new(m20260106_000007_create_payment_table::Migration),
            Box::new(m20260106_000008_create_video_section_table::Migration),
            Box::new(m20260107_000009_create_notification_table::Migration),
            Box::new(m20260107_000010_create_chat_table::Migration),
            Box::new(m20260107_000011_create_message_table::Migration),
            Box::new(m20260108_000012_create_chat_bot_message_table::Migration),
            Box::new(m20260108_000013_create_legal_history_table::Migration),
        ]
    }
}
