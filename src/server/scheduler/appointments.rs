use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{
        appointment::AppointmentRepository, notification::NotificationRepository,
        video_section::VideoSectionRepository,
    },
    error::AppError,
    model::{
        appointment::CHECKOUT_TIMEOUT_MINUTES,
        notification::{CreateNotificationParams, Recipient},
    },
    realtime::RealtimeHub,
    service::{
        appointment::AppointmentService, notification::NotificationService,
        payment::PaymentGateway,
    },
};

/// Sessions starting within this window get a reminder.
const REMINDER_WINDOW_MINUTES: i64 = 60;

/// Unpaid bookings are released this long after their checkout session expired.
const CHECKOUT_GRACE_MINUTES: i64 = 5;

/// Shared resources of the appointment jobs.
#[derive(Clone)]
pub struct SchedulerContext {
    pub db: DatabaseConnection,
    pub hub: RealtimeHub,
    pub gateway: Arc<dyn PaymentGateway>,
    pub client_url: String,
}

/// Starts the appointment maintenance scheduler
///
/// This scheduler runs every minute and:
/// - Sends reminders for confirmed sessions starting within the next hour
/// - Releases bookings whose checkout was abandoned
/// - Retries refunds of cancelled bookings whose payment is still captured
///
/// # Arguments
/// - `ctx`: Database connection, realtime hub and payment gateway
pub async fn start_scheduler(ctx: SchedulerContext) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let ctx = ctx.clone();

        Box::pin(async move {
            process_appointments(&ctx, Utc::now()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Appointment scheduler started");

    Ok(())
}

/// Runs every job; a failure in one does not stop the others.
async fn process_appointments(ctx: &SchedulerContext, now: DateTime<Utc>) {
    if let Err(e) = send_reminders(&ctx.db, &ctx.hub, now).await {
        tracing::error!("Error sending appointment reminders: {}", e);
    }

    if let Err(e) = expire_checkouts(ctx, now).await {
        tracing::error!("Error expiring abandoned checkouts: {}", e);
    }

    if let Err(e) = retry_refunds(ctx).await {
        tracing::error!("Error retrying refunds: {}", e);
    }
}

/// Notifies both participants of confirmed sessions starting within the hour.
///
/// Appointments that already have a reminder are skipped, so every session is
/// announced once.
///
/// # Returns
/// - `Ok(u64)` - Number of appointments reminded
/// - `Err(AppError)` - Database error
pub async fn send_reminders(
    db: &DatabaseConnection,
    hub: &RealtimeHub,
    now: DateTime<Utc>,
) -> Result<u64, AppError> {
    let sections = VideoSectionRepository::new(db)
        .get_confirmed_between(None, now, now + Duration::minutes(REMINDER_WINDOW_MINUTES))
        .await?;

    let notifications = NotificationRepository::new(db);
    let service = NotificationService::new(db, hub);
    let mut reminded = 0;

    for section in sections {
        if notifications
            .exists_for_appointment(&section.appointment_id, NotificationType::AppointmentReminder)
            .await?
        {
            continue;
        }

        let at = section.start_time.format("%H:%M UTC");
        let reminders = [
            (
                Recipient::Client(&section.client_id),
                format!(
                    "Reminder: your consultation with {} starts at {}.",
                    section.lawyer_name, at
                ),
            ),
            (
                Recipient::Lawyer(&section.lawyer_id),
                format!(
                    "Reminder: your consultation with {} starts at {}.",
                    section.client_name, at
                ),
            ),
        ];

        for (recipient, message) in reminders {
            service
                .create(CreateNotificationParams {
                    recipient,
                    appointment_id: Some(&section.appointment_id),
                    kind: NotificationType::AppointmentReminder,
                    message,
                })
                .await?;
        }

        reminded += 1;
    }

    if reminded > 0 {
        tracing::info!("Sent reminders for {} appointments", reminded);
    }

    Ok(reminded)
}

/// Cancels `payment-pending` appointments whose checkout timed out.
///
/// # Returns
/// - `Ok(u64)` - Number of bookings released
/// - `Err(AppError)` - Database error
pub async fn expire_checkouts(ctx: &SchedulerContext, now: DateTime<Utc>) -> Result<u64, AppError> {
    let stale = AppointmentRepository::new(&ctx.db)
        .get_stale_payment_pending(
            now - Duration::minutes(CHECKOUT_TIMEOUT_MINUTES + CHECKOUT_GRACE_MINUTES),
        )
        .await?;

    let service = AppointmentService::new(
        &ctx.db,
        &ctx.hub,
        ctx.gateway.as_ref(),
        &ctx.client_url,
    );

    let mut expired = 0;
    for appointment in stale {
        if service.expire_checkout(&appointment).await? {
            expired += 1;
        }
    }

    Ok(expired)
}

/// Refunds payments still captured for cancelled appointments.
///
/// # Returns
/// - `Ok(u64)` - Number of payments refunded
/// - `Err(AppError)` - Database error
pub async fn retry_refunds(ctx: &SchedulerContext) -> Result<u64, AppError> {
    let refunded = AppointmentService::new(
        &ctx.db,
        &ctx.hub,
        ctx.gateway.as_ref(),
        &ctx.client_url,
    )
    .retry_refunds()
    .await?;

    if refunded > 0 {
        tracing::info!("Refunded {} payments of cancelled appointments", refunded);
    }

    Ok(refunded)
}
