use crate::server::{
    data::{account::AccountStore, lawyer::LawyerRepository},
    error::AppError,
    model::lawyer::{CreateLawyerParams, LawyerFilter},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod get_public;
mod set_verified;
