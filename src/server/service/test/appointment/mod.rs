use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{
    AppointmentStatus, NotificationType, PaymentStatus, SlotStatus, VideoSectionStatus,
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, appointment::AppointmentFactory, client::ClientFactory, payment::PaymentFactory,
        slot::SlotFactory, video_section::VideoSectionFactory,
    },
};

use super::*;
use crate::{
    model::appointment::{CreateAppointmentDto, UpdateAppointmentDto},
    server::{
        data::{
            appointment::AppointmentRepository, notification::NotificationRepository,
            payment::PaymentRepository, slot::SlotRepository,
            video_section::VideoSectionRepository,
        },
        model::notification::Recipient,
        realtime::RealtimeHub,
        service::{
            appointment::{
                AppointmentService, CANCELLED_MESSAGE, CONFIRMED_MESSAGE,
                LATE_PAYMENT_REFUNDED_MESSAGE, UNPAID_CANCELLED_MESSAGE,
            },
            payment::WebhookEventKind,
        },
    },
};

mod book;
mod cancel_by_client;
mod complete_session;
mod expire_checkout;
mod handle_webhook;
mod retry_refunds;
mod update_status_by_lawyer;

fn update_dto(appointment_id: &str, status: &str) -> UpdateAppointmentDto {
    UpdateAppointmentDto {
        appointment_id: Some(appointment_id.to_string()),
        status: Some(status.to_string()),
        notes: None,
    }
}
