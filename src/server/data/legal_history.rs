use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::legal_history::{CreateLegalHistoryParams, LegalHistory},
    util::id::new_id,
};

pub struct LegalHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LegalHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        lawyer_id: &str,
        param: CreateLegalHistoryParams,
    ) -> Result<LegalHistory, AppError> {
        let now = Utc::now();
        let entity = entity::legal_history::ActiveModel {
            id: ActiveValue::Set(new_id()),
            client_id: ActiveValue::Set(param.client_id),
            lawyer_id: ActiveValue::Set(lawyer_id.to_string()),
            title: ActiveValue::Set(param.title),
            case_type: ActiveValue::Set(param.case_type),
            description: ActiveValue::Set(param.description),
            date: ActiveValue::Set(param.date),
            status: ActiveValue::Set(param.status),
            documents: ActiveValue::Set(serde_json::json!(param.documents)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(LegalHistory::from_entity(entity)?)
    }

    /// Gets records with pagination, newest case date first.
    ///
    /// # Arguments
    /// - `owner_column` - `ClientId` or `LawyerId`
    /// - `owner_id` - Id matched against `owner_column`
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of records per page
    pub async fn get_paginated(
        &self,
        owner_column: entity::legal_history::Column,
        owner_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<LegalHistory>, u64), AppError> {
        let paginator = entity::prelude::LegalHistory::find()
            .filter(owner_column.eq(owner_id))
            .order_by_desc(entity::legal_history::Column::Date)
            .order_by_desc(entity::legal_history::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let records = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(LegalHistory::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total))
    }
}
