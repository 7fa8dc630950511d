//! Client factory for creating test client accounts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_hex_id, next_id};

/// Factory for client accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let client = ClientFactory::new(&db)
///     .email("jane@example.com")
///     .verified(false)
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    email: String,
    password: Option<String>,
    address: Option<String>,
    profile_image: Option<String>,
    is_verified: bool,
    is_blocked: bool,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {n}"`, email: `"client{n}@example.com"`
    /// - address and profile image set, so the client can book and chat
    /// - verified and not blocked
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_hex_id(),
            name: format!("Client {}", n),
            email: format!("client{}@example.com", n),
            password: Some("not-a-hash".to_string()),
            address: Some("221B Baker Street".to_string()),
            profile_image: Some(format!("https://cdn.example.com/client/{}.png", n)),
            is_verified: true,
            is_blocked: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password_hash: impl Into<String>) -> Self {
        self.password = Some(password_hash.into());
        self
    }

    pub fn address(mut self, address: Option<&str>) -> Self {
        self.address = address.map(str::to_string);
        self
    }

    pub fn profile_image(mut self, profile_image: Option<&str>) -> Self {
        self.profile_image = profile_image.map(str::to_string);
        self
    }

    pub fn verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    pub fn blocked(mut self, is_blocked: bool) -> Self {
        self.is_blocked = is_blocked;
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        let now = Utc::now();
        entity::client::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            phone: ActiveValue::Set(Some("+91 98765 43210".to_string())),
            address: ActiveValue::Set(self.address),
            occupation: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            profile_image: ActiveValue::Set(self.profile_image),
            is_verified: ActiveValue::Set(self.is_verified),
            is_blocked: ActiveValue::Set(self.is_blocked),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
