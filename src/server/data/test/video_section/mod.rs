use crate::server::data::video_section::VideoSectionRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{AppointmentStatus, VideoSectionStatus};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        appointment::AppointmentFactory, helpers::create_appointment_with_dependencies,
        video_section::VideoSectionFactory,
    },
};

mod get_confirmed_between;
mod get_upcoming_for_lawyer;
