use crate::server::{
    data::{account::AccountStore, client::ClientRepository},
    model::client::{CreateClientParams, UpdateClientProfileParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_chat_ready;
mod get_paginated;
mod mark_verified;
mod set_blocked;
mod update_profile;
