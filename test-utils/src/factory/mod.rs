//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customised rows and a `create_*`
//! shorthand using defaults. Defaults are unique per call (see `helpers::next_id`),
//! so tests can create several rows of the same kind without collisions.
//!
//! ```rust,ignore
//! let client = factory::client::ClientFactory::new(db)
//!     .email("jane@example.com")
//!     .address("12 Court Road")
//!     .build()
//!     .await?;
//!
//! let (client, lawyer, slot, appointment) =
//!     factory::helpers::create_appointment_with_dependencies(db).await?;
//! ```

pub mod admin;
pub mod appointment;
pub mod chat;
pub mod client;
pub mod helpers;
pub mod lawyer;
pub mod notification;
pub mod otp;
pub mod payment;
pub mod slot;
pub mod video_section;

pub use admin::create_admin;
pub use appointment::create_appointment;
pub use chat::{create_chat, create_message};
pub use client::create_client;
pub use lawyer::create_lawyer;
pub use notification::create_notification;
pub use otp::create_otp;
pub use payment::create_payment;
pub use slot::create_slot;
pub use video_section::create_video_section;
