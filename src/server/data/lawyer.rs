//! Lawyer data repository.
//!
//! Lawyer rows carry their qualifications as a JSON array, so conversions into the
//! domain model can fail and most methods return `AppError` rather than `DbErr`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::account::AccountStore,
    error::AppError,
    model::{
        account::{Account, Role},
        lawyer::{CreateLawyerParams, Lawyer, LawyerFilter},
    },
    util::id::new_id,
};

pub struct LawyerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LawyerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unverified lawyer account.
    ///
    /// # Arguments
    /// - `param` - Registration fields with the hashed password
    ///
    /// # Returns
    /// - `Ok(Lawyer)` - The created lawyer
    /// - `Err(AppError)` - Database error, including a duplicate email
    pub async fn create(&self, param: CreateLawyerParams) -> Result<Lawyer, AppError> {
        let now = Utc::now();
        let entity = entity::lawyer::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            phone: ActiveValue::Set(param.phone),
            qualifications: ActiveValue::Set(serde_json::json!(param.qualifications)),
            specialization: ActiveValue::Set(param.specialization),
            experience: ActiveValue::Set(param.experience),
            bar_number: ActiveValue::Set(param.bar_number),
            office_address: ActiveValue::Set(param.office_address),
            bio: ActiveValue::Set(param.bio),
            profile_image: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(false),
            is_blocked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Lawyer::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Lawyer>, AppError> {
        let entity = entity::prelude::Lawyer::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Lawyer::from_entity).transpose()?)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Lawyer::find()
            .filter(entity::lawyer::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets lawyers with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of lawyers per page
    /// - `filter` - Optional verification or block state to restrict to
    ///
    /// # Returns
    /// - `Ok((lawyers, total))` - Lawyers on the page and the total matching count
    /// - `Err(AppError)` - Database or decoding error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        filter: Option<LawyerFilter>,
    ) -> Result<(Vec<Lawyer>, u64), AppError> {
        let mut query = entity::prelude::Lawyer::find();

        query = match filter {
            Some(LawyerFilter::Verified) => query
                .filter(entity::lawyer::Column::IsVerified.eq(true))
                .filter(entity::lawyer::Column::IsBlocked.eq(false)),
            Some(LawyerFilter::NotVerified) => query
                .filter(entity::lawyer::Column::IsVerified.eq(false))
                .filter(entity::lawyer::Column::IsBlocked.eq(false)),
            Some(LawyerFilter::Blocked) => {
                query.filter(entity::lawyer::Column::IsBlocked.eq(true))
            }
            None => query,
        };

        let paginator = query
            .order_by_desc(entity::lawyer::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let lawyers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Lawyer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((lawyers, total))
    }

    /// Verified, unblocked lawyers for the public directory.
    pub async fn get_public(&self, limit: u64) -> Result<Vec<Lawyer>, AppError> {
        let lawyers = entity::prelude::Lawyer::find()
            .filter(entity::lawyer::Column::IsVerified.eq(true))
            .filter(entity::lawyer::Column::IsBlocked.eq(false))
            .order_by_asc(entity::lawyer::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Lawyer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(lawyers)
    }

    /// Sets the verified flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Lawyer updated
    /// - `Ok(false)` - No lawyer with that id
    pub async fn set_verified(&self, id: &str, is_verified: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Lawyer::update_many()
            .filter(entity::lawyer::Column::Id.eq(id))
            .col_expr(entity::lawyer::Column::IsVerified, Expr::value(is_verified))
            .col_expr(entity::lawyer::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the blocked flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Lawyer updated
    /// - `Ok(false)` - No lawyer with that id
    pub async fn set_blocked(&self, id: &str, is_blocked: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Lawyer::update_many()
            .filter(entity::lawyer::Column::Id.eq(id))
            .col_expr(entity::lawyer::Column::IsBlocked, Expr::value(is_blocked))
            .col_expr(entity::lawyer::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_profile_image(&self, id: &str, url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Lawyer::update_many()
            .filter(entity::lawyer::Column::Id.eq(id))
            .col_expr(entity::lawyer::Column::ProfileImage, Expr::value(url))
            .col_expr(entity::lawyer::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl AccountStore for LawyerRepository<'_> {
    fn role(&self) -> Role {
        Role::Lawyer
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Lawyer::find()
            .filter(entity::lawyer::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_lawyer))
    }

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Lawyer::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_lawyer))
    }

    /// Lawyers are verified by an admin, never by completing an OTP login.
    async fn mark_verified(&self, _id: &str) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_password(&self, id: &str, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::Lawyer::update_many()
            .filter(entity::lawyer::Column::Id.eq(id))
            .col_expr(entity::lawyer::Column::Password, Expr::value(password_hash))
            .col_expr(entity::lawyer::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
