//! Account management for admins and the public lawyer directory.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{client::ClientRepository, lawyer::LawyerRepository},
    error::AppError,
    model::{
        client::Client,
        lawyer::{Lawyer, LawyerFilter},
        pagination::Paginated,
    },
    util::validate,
};

/// Size of the public lawyer directory.
const PUBLIC_DIRECTORY_LIMIT: u64 = 100;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn clients(&self, page: u64, per_page: u64) -> Result<Paginated<Client>, AppError> {
        let (clients, total) = ClientRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(clients, total, page, per_page))
    }

    pub async fn set_client_blocked(&self, client_id: &str, is_blocked: bool) -> Result<(), AppError> {
        validate::id(client_id)?;

        if !ClientRepository::new(self.db)
            .set_blocked(client_id, is_blocked)
            .await?
        {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        tracing::info!("Client {} blocked: {}", client_id, is_blocked);

        Ok(())
    }

    /// Lawyers filtered by `verified`, `not-verified` or `blocked`; all lawyers without a filter.
    pub async fn lawyers(
        &self,
        page: u64,
        per_page: u64,
        filter: Option<&str>,
    ) -> Result<Paginated<Lawyer>, AppError> {
        let filter = match filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(value) => Some(LawyerFilter::parse(value).ok_or_else(|| {
                AppError::BadRequest(
                    "Invalid value for type, expected one of: verified, not-verified, blocked"
                        .to_string(),
                )
            })?),
            None => None,
        };

        let (lawyers, total) = LawyerRepository::new(self.db)
            .get_paginated(page, per_page, filter)
            .await?;

        Ok(Paginated::new(lawyers, total, page, per_page))
    }

    pub async fn verify_lawyer(&self, lawyer_id: &str) -> Result<(), AppError> {
        validate::id(lawyer_id)?;

        if !LawyerRepository::new(self.db)
            .set_verified(lawyer_id, true)
            .await?
        {
            return Err(AppError::NotFound("Lawyer not found".to_string()));
        }

        tracing::info!("Lawyer {} verified", lawyer_id);

        Ok(())
    }

    pub async fn set_lawyer_blocked(&self, lawyer_id: &str, is_blocked: bool) -> Result<(), AppError> {
        validate::id(lawyer_id)?;

        if !LawyerRepository::new(self.db)
            .set_blocked(lawyer_id, is_blocked)
            .await?
        {
            return Err(AppError::NotFound("Lawyer not found".to_string()));
        }

        tracing::info!("Lawyer {} blocked: {}", lawyer_id, is_blocked);

        Ok(())
    }

    /// Verified, unblocked lawyers shown to visitors.
    pub async fn public_lawyers(&self) -> Result<Vec<Lawyer>, AppError> {
        LawyerRepository::new(self.db)
            .get_public(PUBLIC_DIRECTORY_LIMIT)
            .await
    }
}
