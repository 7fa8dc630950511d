//! Admin data repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::account::AccountStore,
    model::account::{Account, Role},
    util::id::new_id,
};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an admin account.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Login email, unique among admins
    /// - `password_hash` - Bcrypt hash of the password
    ///
    /// # Returns
    /// - `Ok(Account)` - The created admin
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Account, DbErr> {
        let now = Utc::now();
        let entity = entity::admin::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_admin(entity))
    }

    /// Checks if any admin exists, used when seeding the first admin.
    pub async fn exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find().count(self.db).await?;

        Ok(count > 0)
    }
}

#[async_trait]
impl AccountStore for AdminRepository<'_> {
    fn role(&self) -> Role {
        Role::Admin
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_admin))
    }

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_admin))
    }

    async fn mark_verified(&self, _id: &str) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_password(&self, id: &str, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .filter(entity::admin::Column::Id.eq(id))
            .col_expr(entity::admin::Column::Password, Expr::value(password_hash))
            .col_expr(entity::admin::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
