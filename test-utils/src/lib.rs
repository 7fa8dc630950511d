//! Lexconsult Test Utils
//!
//! Shared helpers for the backend's unit and integration tests. Tests build an in-memory
//! SQLite database with only the tables they touch, then seed rows through the factories.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder selecting which entity tables to create
//! - **TestContext**: the built environment holding the connection and a session
//! - **factory**: per-entity builders with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_slot() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db();
//!
//!     let lawyer = factory::create_lawyer(db).await?;
//!     let slot = factory::create_slot(db, &lawyer.id).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
