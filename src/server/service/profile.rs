use sea_orm::DatabaseConnection;

use crate::{
    model::client::UpdateClientProfileDto,
    server::{
        data::{client::ClientRepository, lawyer::LawyerRepository},
        error::AppError,
        model::client::{Client, UpdateClientProfileParams},
        util::validate,
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
    /// Base URL uploaded images are served from.
    storage_url: &'a str,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage_url: &'a str) -> Self {
        Self { db, storage_url }
    }

    pub async fn get_client_profile(&self, client_id: &str) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    /// Applies the provided profile fields, leaving the others unchanged.
    pub async fn update_client_profile(
        &self,
        client_id: &str,
        dto: UpdateClientProfileDto,
    ) -> Result<Client, AppError> {
        let params = UpdateClientProfileParams::from_dto(dto)?;

        ClientRepository::new(self.db)
            .update_profile(client_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    /// Points the client's profile image at an uploaded object.
    pub async fn update_client_image(&self, client_id: &str, key: Option<&str>) -> Result<String, AppError> {
        let url = self.image_url(key)?;

        if !ClientRepository::new(self.db)
            .set_profile_image(client_id, &url)
            .await?
        {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        Ok(url)
    }

    pub async fn update_lawyer_image(&self, lawyer_id: &str, key: Option<&str>) -> Result<String, AppError> {
        let url = self.image_url(key)?;

        if !LawyerRepository::new(self.db)
            .set_profile_image(lawyer_id, &url)
            .await?
        {
            return Err(AppError::NotFound("Lawyer not found".to_string()));
        }

        Ok(url)
    }

    fn image_url(&self, key: Option<&str>) -> Result<String, AppError> {
        validate::required(&[("key", key)])?;
        let key = key.unwrap_or_default().trim().trim_start_matches('/');

        validate::length("key", key, 1, 256)?;
        if key.contains("..") {
            return Err(AppError::BadRequest("Invalid image key".to_string()));
        }

        Ok(format!("{}/{}", self.storage_url, key))
    }
}
