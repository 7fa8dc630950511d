//! Client data repository.
//!
//! Handles client account creation, profile updates, blocking and the lookups
//! used by chat and the lawyer's client list.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::account::AccountStore,
    model::{
        account::{Account, Role},
        client::{Client, CreateClientParams, UpdateClientProfileParams},
    },
    util::id::new_id,
};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a client account.
    ///
    /// # Arguments
    /// - `param` - Account fields; `password_hash` is `None` for OAuth accounts
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, param: CreateClientParams) -> Result<Client, DbErr> {
        let now = Utc::now();
        let entity = entity::client::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            phone: ActiveValue::Set(param.phone),
            address: ActiveValue::Set(None),
            occupation: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            profile_image: ActiveValue::Set(param.profile_image),
            is_verified: ActiveValue::Set(param.is_verified),
            is_blocked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find()
            .filter(entity::client::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Gets all clients with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of clients per page
    ///
    /// # Returns
    /// - `Ok((clients, total))` - Clients on the page and the total client count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Client>, u64), DbErr> {
        let paginator = entity::prelude::Client::find()
            .order_by_desc(entity::client::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Client::from_entity).collect(), total))
    }

    /// Gets the clients among `ids` with pagination, ordered by name.
    pub async fn get_paginated_by_ids(
        &self,
        ids: Vec<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Client>, u64), DbErr> {
        let paginator = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.is_in(ids))
            .order_by_asc(entity::client::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Client::from_entity).collect(), total))
    }

    /// Clients that can be shown in a chat, i.e. with a name and profile image.
    pub async fn get_chat_ready(&self) -> Result<Vec<Client>, DbErr> {
        let entities = entity::prelude::Client::find()
            .filter(entity::client::Column::Name.ne(""))
            .filter(entity::client::Column::ProfileImage.is_not_null())
            .filter(entity::client::Column::ProfileImage.ne(""))
            .order_by_asc(entity::client::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    /// Sets the blocked flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Client updated
    /// - `Ok(false)` - No client with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_blocked(&self, id: &str, is_blocked: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::update_many()
            .filter(entity::client::Column::Id.eq(id))
            .col_expr(entity::client::Column::IsBlocked, Expr::value(is_blocked))
            .col_expr(entity::client::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies a partial profile update, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Updated client
    /// - `Ok(None)` - No client with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: &str,
        param: UpdateClientProfileParams,
    ) -> Result<Option<Client>, DbErr> {
        let Some(entity) = entity::prelude::Client::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::client::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(occupation) = param.occupation {
            active.occupation = ActiveValue::Set(Some(occupation));
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(birth_date) = param.birth_date {
            active.birth_date = ActiveValue::Set(Some(birth_date));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Client::from_entity(entity)))
    }

    /// Stores a new profile image URL.
    ///
    /// # Returns
    /// - `Ok(true)` - Client updated
    /// - `Ok(false)` - No client with that id
    pub async fn set_profile_image(&self, id: &str, url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::update_many()
            .filter(entity::client::Column::Id.eq(id))
            .col_expr(entity::client::Column::ProfileImage, Expr::value(url))
            .col_expr(entity::client::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl AccountStore for ClientRepository<'_> {
    fn role(&self) -> Role {
        Role::Client
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Client::find()
            .filter(entity::client::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_client))
    }

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_client))
    }

    async fn mark_verified(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Client::update_many()
            .filter(entity::client::Column::Id.eq(id))
            .col_expr(entity::client::Column::IsVerified, Expr::value(true))
            .col_expr(entity::client::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn set_password(&self, id: &str, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::Client::update_many()
            .filter(entity::client::Column::Id.eq(id))
            .col_expr(entity::client::Column::Password, Expr::value(password_hash))
            .col_expr(entity::client::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
