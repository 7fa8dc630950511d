use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Built test environment.
///
/// Holds a connection to a private in-memory SQLite database. When the builder
/// requested one, a session stored in the same database is available too.
pub struct TestContext {
    db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    /// Opens a new in-memory database.
    ///
    /// The pool is limited to a single connection since every new SQLite
    /// `:memory:` connection would otherwise see an empty database.
    pub async fn connect() -> Result<Self, TestError> {
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self { db, session: None })
    }

    /// Executes each CREATE TABLE statement in order.
    pub async fn create_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the session table and a fresh session using it.
    pub async fn attach_session(&mut self) -> Result<(), TestError> {
        let pool = self.db.get_sqlite_connection_pool();
        let store = SqliteStore::new(pool.clone());

        store
            .migrate()
            .await
            .map_err(|e| TestError::SessionStore(e.to_string()))?;

        self.session = Some(Session::new(
            None,
            Arc::new(store),
            Some(Expiry::OnInactivity(Duration::days(7))),
        ));

        Ok(())
    }

    /// Database connection of this environment.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Session of this environment.
    ///
    /// # Panics
    /// When the builder was not configured with `with_session()`.
    pub fn session(&self) -> &Session {
        self.session
            .as_ref()
            .expect("TestBuilder::with_session() was not called")
    }
}
