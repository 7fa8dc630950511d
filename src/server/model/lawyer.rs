//! Lawyer domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::lawyer::{LawyerDto, PaginatedLawyersDto},
    server::{error::internal::InternalError, model::pagination::Paginated},
};

/// Lawyer profile without credentials.
#[derive(Debug, Clone)]
pub struct Lawyer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub qualifications: Vec<String>,
    pub specialization: Option<String>,
    pub experience: Option<i32>,
    pub bar_number: Option<String>,
    pub office_address: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl Lawyer {
    /// Converts the entity, decoding the JSON qualifications column.
    ///
    /// # Returns
    /// - `Ok(Lawyer)` - Converted domain model
    /// - `Err(InternalError::StoredJson)` - Qualifications are not a string array
    pub fn from_entity(entity: entity::lawyer::Model) -> Result<Self, InternalError> {
        let qualifications = serde_json::from_value(entity.qualifications).map_err(|source| {
            InternalError::StoredJson {
                column: "lawyer.qualifications",
                source,
            }
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            qualifications,
            specialization: entity.specialization,
            experience: entity.experience,
            bar_number: entity.bar_number,
            office_address: entity.office_address,
            bio: entity.bio,
            profile_image: entity.profile_image,
            is_verified: entity.is_verified,
            is_blocked: entity.is_blocked,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> LawyerDto {
        LawyerDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            qualifications: self.qualifications,
            specialization: self.specialization,
            experience: self.experience,
            bar_number: self.bar_number,
            office_address: self.office_address,
            bio: self.bio,
            profile_image: self.profile_image,
            is_verified: self.is_verified,
            is_blocked: self.is_blocked,
            created_at: self.created_at,
        }
    }
}

impl Paginated<Lawyer> {
    pub fn into_dto(self) -> PaginatedLawyersDto {
        PaginatedLawyersDto {
            lawyers: self.items.into_iter().map(Lawyer::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Fields stored for a new lawyer account.
#[derive(Debug, Clone)]
pub struct CreateLawyerParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub qualifications: Vec<String>,
    pub specialization: Option<String>,
    pub experience: Option<i32>,
    pub bar_number: Option<String>,
    pub office_address: Option<String>,
    pub bio: Option<String>,
}

/// Admin listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LawyerFilter {
    /// Verified and not blocked.
    Verified,
    /// Awaiting verification and not blocked.
    NotVerified,
    Blocked,
}

impl LawyerFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "verified" => Some(Self::Verified),
            "not-verified" => Some(Self::NotVerified),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}
