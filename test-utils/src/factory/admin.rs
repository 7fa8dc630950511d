use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_hex_id, next_id};

/// Factory for admin accounts.
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
}

impl<'a> AdminFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            email: format!("admin{}@example.com", next_id()),
            password: "not-a-hash".to_string(),
        }
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

    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        let now = Utc::now();
        entity::admin::ActiveModel {
            id: ActiveValue::Set(next_hex_id()),
            name: ActiveValue::Set("Admin".to_string()),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
