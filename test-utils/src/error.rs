use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The session store table could not be created.
    #[error("Failed to prepare session store: {0}")]
    SessionStore(String),
}
