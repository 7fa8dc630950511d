use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test environments backed by an in-memory SQLite database.
///
/// Tables are created in the order they are added, so parents must come before
/// the tables referencing them. The grouped helpers (`with_account_tables`,
/// `with_booking_tables`, ...) already respect that order.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Client)
///     .with_table(ChatBotMessage)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    session: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            session: false,
        }
    }

    /// Adds the CREATE TABLE statement generated from `entity`.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Also creates a session backed by the same database.
    ///
    /// Needed by tests touching refresh-token storage.
    pub fn with_session(mut self) -> Self {
        self.session = true;
        self
    }

    /// Adds the three account tables plus the OTP store.
    pub fn with_account_tables(self) -> Self {
        self.with_table(Admin)
            .with_table(Client)
            .with_table(Lawyer)
            .with_table(Otp)
    }

    /// Adds every table involved in booking an appointment.
    ///
    /// Includes accounts, slots, appointments, payments, video sections and
    /// notifications.
    pub fn with_booking_tables(self) -> Self {
        self.with_account_tables()
            .with_table(Slot)
            .with_table(Appointment)
            .with_table(Payment)
            .with_table(VideoSection)
            .with_table(Notification)
    }

    /// Adds the client, lawyer, chat and message tables.
    pub fn with_chat_tables(self) -> Self {
        self.with_table(Client)
            .with_table(Lawyer)
            .with_table(Chat)
            .with_table(Message)
    }

    /// Adds all tables of the application.
    pub fn with_all_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(Chat)
            .with_table(Message)
            .with_table(ChatBotMessage)
            .with_table(LegalHistory)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Environment ready for use
    /// - `Err(TestError)` - Connection, table creation or session setup failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::connect().await?;

        context.create_tables(self.tables).await?;

        if self.session {
            context.attach_session().await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
