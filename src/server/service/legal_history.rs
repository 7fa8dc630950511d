use sea_orm::DatabaseConnection;

use crate::{
    model::legal_history::CreateLegalHistoryDto,
    server::{
        data::{client::ClientRepository, legal_history::LegalHistoryRepository},
        error::AppError,
        model::{
            legal_history::{CreateLegalHistoryParams, LegalHistory},
            pagination::Paginated,
        },
        util::validate,
    },
};

pub struct LegalHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LegalHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a case for one of the lawyer's clients.
    ///
    /// # Returns
    /// - `Ok(LegalHistory)` - Stored record
    /// - `Err(AppError::BadRequest)` - Missing or invalid field
    /// - `Err(AppError::NotFound)` - Unknown client
    pub async fn create(
        &self,
        lawyer_id: &str,
        dto: CreateLegalHistoryDto,
    ) -> Result<LegalHistory, AppError> {
        let params = CreateLegalHistoryParams::from_dto(dto)?;

        if ClientRepository::new(self.db)
            .find_by_id(&params.client_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        let record = LegalHistoryRepository::new(self.db)
            .create(lawyer_id, params)
            .await?;

        tracing::info!("Lawyer {} recorded case {} for client {}", lawyer_id, record.id, record.client_id);

        Ok(record)
    }

    pub async fn list_for_client(
        &self,
        client_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<LegalHistory>, AppError> {
        validate::id(client_id)?;
        self.list(entity::legal_history::Column::ClientId, client_id, page, per_page)
            .await
    }

    pub async fn list_for_lawyer(
        &self,
        lawyer_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<LegalHistory>, AppError> {
        self.list(entity::legal_history::Column::LawyerId, lawyer_id, page, per_page)
            .await
    }

    async fn list(
        &self,
        owner: entity::legal_history::Column,
        owner_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<LegalHistory>, AppError> {
        let (records, total) = LegalHistoryRepository::new(self.db)
            .get_paginated(owner, owner_id, page, per_page)
            .await?;

        Ok(Paginated::new(records, total, page, per_page))
    }
}
