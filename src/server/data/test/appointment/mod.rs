use crate::server::{
    data::appointment::AppointmentRepository,
    model::{
        appointment::{CreateAppointmentParams, NewBooking},
        client::Client,
        lawyer::Lawyer,
        slot::Slot,
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{
    AppointmentStatus, AppointmentType, PaymentStatus, SlotStatus, VideoSectionStatus,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, appointment::AppointmentFactory, helpers::create_appointment_with_dependencies},
};

mod capture_payment;
mod client_ids_for_lawyer;
mod create_booking;
mod get_paginated;
mod get_stale_payment_pending;
mod slot_taken_on;
