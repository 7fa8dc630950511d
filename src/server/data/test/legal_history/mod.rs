use crate::server::{
    data::legal_history::LegalHistoryRepository, error::AppError,
    model::legal_history::CreateLegalHistoryParams,
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod create;
