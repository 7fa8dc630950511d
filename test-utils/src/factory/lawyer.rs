//! Lawyer factory for creating test lawyer accounts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_hex_id, next_id};

/// Factory for lawyer accounts with customizable fields.
pub struct LawyerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
    is_verified: bool,
    is_blocked: bool,
}

impl<'a> LawyerFactory<'a> {
    /// Creates a new LawyerFactory with default values.
    ///
    /// Defaults to a verified, unblocked lawyer named `"Lawyer {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Lawyer {}", n),
            email: format!("lawyer{}@example.com", n),
            password: "not-a-hash".to_string(),
            is_verified: true,
            is_blocked: false,
        }
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
        self.password = password_hash.into();
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

    pub async fn build(self) -> Result<entity::lawyer::Model, DbErr> {
        let now = Utc::now();
        entity::lawyer::ActiveModel {
            id: ActiveValue::Set(next_hex_id()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            phone: ActiveValue::Set(None),
            qualifications: ActiveValue::Set(serde_json::json!(["LLB"])),
            specialization: ActiveValue::Set(Some("Family Law".to_string())),
            experience: ActiveValue::Set(Some(5)),
            bar_number: ActiveValue::Set(None),
            office_address: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            profile_image: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(self.is_verified),
            is_blocked: ActiveValue::Set(self.is_blocked),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified lawyer with default values.
pub async fn create_lawyer(db: &DatabaseConnection) -> Result<entity::lawyer::Model, DbErr> {
    LawyerFactory::new(db).build().await
}
