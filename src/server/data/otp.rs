use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::model::account::Otp;

/// Stores at most one pending one-time code per email address.
pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces any code stored for `email` with a new one.
    ///
    /// # Returns
    /// - `Ok(Otp)` - The stored code
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn replace(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Otp, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::Email.eq(email))
            .exec(&txn)
            .await?;

        let entity = entity::otp::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Otp::from_entity(entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Otp>, DbErr> {
        let entity = entity::prelude::Otp::find()
            .filter(entity::otp::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Otp::from_entity))
    }

    pub async fn delete(&self, email: &str) -> Result<(), DbErr> {
        entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
