//! Client domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::client::{ClientDto, PaginatedClientsDto, UpdateClientProfileDto},
    server::{error::AppError, model::pagination::Paginated, util::validate},
};

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Client profile without credentials.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            occupation: entity.occupation,
            gender: entity.gender,
            birth_date: entity.birth_date,
            profile_image: entity.profile_image,
            is_verified: entity.is_verified,
            is_blocked: entity.is_blocked,
            created_at: entity.created_at,
        }
    }

    /// A client can book once an address is on file.
    pub fn has_complete_profile(&self) -> bool {
        self.address.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            occupation: self.occupation,
            gender: self.gender,
            birth_date: self.birth_date,
            profile_image: self.profile_image,
            is_verified: self.is_verified,
            is_blocked: self.is_blocked,
            created_at: self.created_at,
        }
    }
}

impl Paginated<Client> {
    pub fn into_dto(self) -> PaginatedClientsDto {
        PaginatedClientsDto {
            clients: self.items.into_iter().map(Client::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Fields stored for a new client account.
#[derive(Debug, Clone)]
pub struct CreateClientParams {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
}

/// Partial profile update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientProfileParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl UpdateClientProfileParams {
    pub fn from_dto(dto: UpdateClientProfileDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            validate::length("name", name, 3, 20)?;
        }
        if let Some(phone) = &dto.phone {
            validate::phone(phone)?;
        }
        if let Some(address) = &dto.address {
            validate::length("address", address, 1, 500)?;
        }
        if let Some(occupation) = &dto.occupation {
            validate::length("occupation", occupation, 1, 100)?;
        }
        if let Some(gender) = &dto.gender {
            if !GENDERS.contains(&gender.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Invalid value for gender, expected one of: {}",
                    GENDERS.join(", ")
                )));
            }
        }
        let birth_date = dto.birth_date.as_deref().map(validate::date).transpose()?;

        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            phone: dto.phone,
            address: dto.address.map(|a| a.trim().to_string()),
            occupation: dto.occupation,
            gender: dto.gender,
            birth_date,
        })
    }
}
