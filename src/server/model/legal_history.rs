//! Case history records kept by lawyers for their clients.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::legal_history::{CreateLegalHistoryDto, LegalHistoryDto, PaginatedLegalHistoryDto},
    server::{
        error::{internal::InternalError, AppError},
        model::pagination::Paginated,
        util::validate,
    },
};

#[derive(Debug, Clone)]
pub struct LegalHistory {
    pub id: String,
    pub client_id: String,
    pub lawyer_id: String,
    pub title: String,
    pub case_type: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: String,
    pub documents: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LegalHistory {
    pub fn from_entity(entity: entity::legal_history::Model) -> Result<Self, InternalError> {
        let documents = serde_json::from_value(entity.documents).map_err(|source| {
            InternalError::StoredJson {
                column: "legal_history.documents",
                source,
            }
        })?;

        Ok(Self {
            id: entity.id,
            client_id: entity.client_id,
            lawyer_id: entity.lawyer_id,
            title: entity.title,
            case_type: entity.case_type,
            description: entity.description,
            date: entity.date,
            status: entity.status,
            documents,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> LegalHistoryDto {
        LegalHistoryDto {
            id: self.id,
            client_id: self.client_id,
            lawyer_id: self.lawyer_id,
            title: self.title,
            case_type: self.case_type,
            description: self.description,
            date: self.date,
            status: self.status,
            documents: self.documents,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Paginated<LegalHistory> {
    pub fn into_dto(self) -> PaginatedLegalHistoryDto {
        PaginatedLegalHistoryDto {
            records: self.items.into_iter().map(LegalHistory::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLegalHistoryParams {
    pub client_id: String,
    pub title: String,
    pub case_type: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: String,
    pub documents: Vec<String>,
}

impl CreateLegalHistoryParams {
    pub fn from_dto(dto: CreateLegalHistoryDto) -> Result<Self, AppError> {
        validate::required(&[
            ("client_id", dto.client_id.as_deref()),
            ("title", dto.title.as_deref()),
            ("case_type", dto.case_type.as_deref()),
            ("description", dto.description.as_deref()),
            ("date", dto.date.as_deref()),
        ])?;

        let client_id = dto.client_id.unwrap_or_default();
        validate::id(&client_id)?;

        let title = dto.title.unwrap_or_default().trim().to_string();
        validate::length("title", &title, 1, 200)?;
        let case_type = dto.case_type.unwrap_or_default().trim().to_string();
        validate::length("case_type", &case_type, 1, 100)?;
        let description = dto.description.unwrap_or_default().trim().to_string();
        validate::length("description", &description, 1, 5000)?;
        let date = validate::date(dto.date.as_deref().unwrap_or_default())?;

        let status = dto
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "open".to_string());

        Ok(Self {
            client_id,
            title,
            case_type,
            description,
            date,
            status,
            documents: dto.documents,
        })
    }
}
