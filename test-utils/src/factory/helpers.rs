//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a unique 24 character hex id in the application's id format.
pub fn next_hex_id() -> String {
    format!("{:024x}", next_id())
}

/// Creates a confirmed appointment together with everything it references.
///
/// Creates a client with an address, a verified lawyer, one of the lawyer's
/// slots and a confirmed appointment for tomorrow on that slot.
///
/// # Returns
/// - `Ok((client, lawyer, slot, appointment))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::client::Model,
        entity::lawyer::Model,
        entity::slot::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let client = crate::factory::client::create_client(db).await?;
    let lawyer = crate::factory::lawyer::create_lawyer(db).await?;
    let slot = crate::factory::slot::create_slot(db, &lawyer.id).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, &client.id, &lawyer.id, &slot.id)
            .await?;

    Ok((client, lawyer, slot, appointment))
}
