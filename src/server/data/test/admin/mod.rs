use crate::server::data::{account::AccountStore, admin::AdminRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod set_password;
