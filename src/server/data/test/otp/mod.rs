use crate::server::data::otp::OtpRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod replace;
