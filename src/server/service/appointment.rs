//! Appointment lifecycle.
//!
//! A booking starts as `payment-pending` with a hosted checkout session. The
//! provider's webhook confirms it; lawyers and clients may later cancel it, which
//! refunds captured payments and frees the slot; the lawyer completes it once the
//! session has started.
//!
//! A captured payment is refunded before its booking is cancelled. Money that
//! arrives for a booking closed in the meantime is refunded on receipt, and the
//! scheduler retries refunds that failed.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{
    AppointmentStatus, NotificationType, PaymentStatus, SlotStatus, VideoSectionStatus,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::appointment::{CreateAppointmentDto, UpdateAppointmentDto},
    server::{
        data::{
            appointment::AppointmentRepository, client::ClientRepository,
            lawyer::LawyerRepository, payment::PaymentRepository, slot::SlotRepository,
            video_section::VideoSectionRepository,
        },
        error::AppError,
        model::{
            appointment::{
                Appointment, AppointmentDetails, BookingCheckout, CreateAppointmentParams,
                NewBooking, Viewer, CHECKOUT_TIMEOUT_MINUTES, CONSULTATION_CURRENCY,
                CONSULTATION_FEE,
            },
            client::Client,
            notification::{CreateNotificationParams, Recipient},
            pagination::Paginated,
            payment::PaymentCapture,
        },
        realtime::RealtimeHub,
        service::{
            notification::NotificationService,
            payment::{CheckoutRequest, PaymentGateway, WebhookEventKind},
        },
        util::{
            id::{new_id, new_room_id},
            time::{day_of, session_start, SAME_DAY_LEAD_MINUTES, SESSION_LENGTH_MINUTES},
            validate,
        },
    },
};

/// How long after checkout the success page may show the booking.
const SUCCESS_PAGE_WINDOW_MINUTES: i64 = 10;

pub const CONFIRMED_MESSAGE: &str =
    "Your appointment has been accepted! Please make sure to be available at the scheduled time.";
pub const CANCELLED_MESSAGE: &str = "Your appointment has been canceled. Your refund will be credited to your account in 10 working days. If you have any questions, please contact our support team.";
pub const UNPAID_CANCELLED_MESSAGE: &str =
    "Your appointment has been canceled. No payment was taken.";
pub const LAWYER_UNAVAILABLE_MESSAGE: &str =
    "Your appointment has been cancelled due to lawyer unavailability";
pub const LATE_PAYMENT_REFUNDED_MESSAGE: &str = "Your payment arrived after the appointment was canceled and has been refunded. It will be credited to your account in 10 working days.";
const CLIENT_CANCELLED_LAWYER_MESSAGE: &str =
    "The appointment has been canceled. The slot is now available for other clients.";

/// Why an appointment is cancelled; picks the message sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// One of the participants asked for it.
    Requested,
    /// The lawyer withdrew the slot.
    LawyerUnavailable,
}

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a RealtimeHub,
    gateway: &'a dyn PaymentGateway,
    client_url: &'a str,
}

impl<'a> AppointmentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        hub: &'a RealtimeHub,
        gateway: &'a dyn PaymentGateway,
        client_url: &'a str,
    ) -> Self {
        Self {
            db,
            hub,
            gateway,
            client_url,
        }
    }

    /// Books a slot and opens a checkout session for the consultation fee.
    ///
    /// The slot, payment, appointment and video section are written in one
    /// transaction after the checkout session was created.
    ///
    /// # Returns
    /// - `Ok(BookingCheckout)` - Checkout session the client is redirected to
    /// - `Err(AppError::BadRequest)` - Invalid request, slot of another lawyer or
    ///   weekday, session starting within the same-day lead time, or the client
    ///   has no address on file
    /// - `Err(AppError::Forbidden)` - Lawyer is blocked or not verified
    /// - `Err(AppError::NotFound)` - Unknown client, lawyer or slot
    /// - `Err(AppError::Conflict)` - Slot already booked for that date
    /// - `Err(AppError::PaymentErr)` - Checkout session could not be created
    pub async fn book(
        &self,
        client_id: &str,
        dto: CreateAppointmentDto,
    ) -> Result<BookingCheckout, AppError> {
        validate::id(client_id)?;
        let params = CreateAppointmentParams::from_dto(dto, Utc::now().date_naive())?;

        let client = ClientRepository::new(self.db).find_by_id(client_id).await?;
        let lawyer = LawyerRepository::new(self.db)
            .find_by_id(&params.lawyer_id)
            .await?;
        let (Some(client), Some(lawyer)) = (client, lawyer) else {
            return Err(AppError::NotFound("Client or Lawyer Not Found".to_string()));
        };
        if lawyer.is_blocked || !lawyer.is_verified {
            return Err(AppError::Forbidden(
                "Lawyer blocked or not verified".to_string(),
            ));
        }

        let slot = SlotRepository::new(self.db)
            .find_by_id(&params.slot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Slot Not Found".to_string()))?;

        if slot.lawyer_id != lawyer.id {
            return Err(AppError::BadRequest(
                "Slot does not belong to the lawyer".to_string(),
            ));
        }
        if slot.day != day_of(params.date) {
            return Err(AppError::BadRequest(
                "Slot is not available on the selected date".to_string(),
            ));
        }
        let session_start = session_start(params.date, &slot.start_time)?;
        if session_start <= Utc::now() + Duration::minutes(SAME_DAY_LEAD_MINUTES) {
            return Err(AppError::BadRequest(
                "Slot is no longer available for booking".to_string(),
            ));
        }
        if !client.has_complete_profile() {
            return Err(AppError::BadRequest("Profile is missing".to_string()));
        }

        let repo = AppointmentRepository::new(self.db);
        if repo.slot_taken_on(&slot.id, params.date).await? {
            return Err(AppError::Conflict("Slot already booked".to_string()));
        }

        let payment_id = new_id();

        let checkout = self
            .gateway
            .create_checkout_session(CheckoutRequest {
                amount: CONSULTATION_FEE,
                currency: CONSULTATION_CURRENCY.to_string(),
                success_url: format!("{}/new-appointment/{}", self.client_url, payment_id),
                cancel_url: format!("{}/new-appointment/cancel/{}", self.client_url, payment_id),
                payment_id: payment_id.clone(),
                expires_at: Utc::now() + Duration::minutes(CHECKOUT_TIMEOUT_MINUTES),
            })
            .await?;

        let created = repo
            .create_booking(NewBooking {
                appointment_id: new_id(),
                payment_id,
                checkout_session_id: checkout.id.clone(),
                client,
                lawyer,
                slot,
                params,
                session_start,
                session_end: session_start + Duration::minutes(SESSION_LENGTH_MINUTES),
                room_id: new_room_id(),
            })
            .await;

        let appointment = match created {
            Ok(Some(appointment)) => appointment,
            Ok(None) => return Err(self.abandon_checkout(&checkout.id).await),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(self.abandon_checkout(&checkout.id).await);
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            "Booked appointment {} for client {}, awaiting payment",
            appointment.id,
            appointment.client_id
        );

        Ok(BookingCheckout {
            session_id: checkout.id,
            checkout_url: checkout.url,
        })
    }

    /// Confirms the booking paid for by a verified provider event.
    ///
    /// Events that are irrelevant, lack our payment id, reference an unknown
    /// payment or repeat an earlier capture are acknowledged without effect. A
    /// capture for a booking that was closed meanwhile is refunded; when that
    /// refund fails the scheduler retries it.
    pub async fn handle_webhook(&self, body: &str, signature: &str) -> Result<(), AppError> {
        let event = self.gateway.parse_webhook(body, signature)?;

        if event.kind == WebhookEventKind::Ignored {
            return Ok(());
        }
        let Some(payment_id) = event.payment_id else {
            return Ok(());
        };

        let capture = AppointmentRepository::new(self.db)
            .capture_payment(&payment_id, event.transaction_id.as_deref())
            .await?;

        match capture {
            PaymentCapture::Ignored => {
                tracing::debug!("Webhook for payment {} changed nothing", payment_id);
            }
            PaymentCapture::Confirmed(appointment) => {
                tracing::info!(
                    "Payment {} captured, appointment {} confirmed",
                    payment_id,
                    appointment.id
                );

                self.notify(
                    Recipient::Client(&appointment.client_id),
                    &appointment.id,
                    NotificationType::AppointmentConfirmed,
                    CONFIRMED_MESSAGE,
                )
                .await?;
            }
            PaymentCapture::Closed(appointment) => {
                tracing::warn!(
                    "Payment {} captured after appointment {} was closed",
                    payment_id,
                    appointment.id
                );

                if let Err(e) = self.refund(&appointment).await {
                    tracing::error!("Refund of late payment {} failed: {}", payment_id, e);
                    return Ok(());
                }

                self.notify(
                    Recipient::Client(&appointment.client_id),
                    &appointment.id,
                    NotificationType::AppointmentCanceled,
                    LATE_PAYMENT_REFUNDED_MESSAGE,
                )
                .await?;
            }
        }

        Ok(())
    }

    /// Appointments of a lawyer with client details, newest first.
    pub async fn list_for_lawyer(
        &self,
        lawyer_id: &str,
        page: u64,
        per_page: u64,
        status: Option<&str>,
    ) -> Result<Paginated<AppointmentDetails>, AppError> {
        let status = parse_status_filter(status)?;
        let (appointments, total) = AppointmentRepository::new(self.db)
            .get_paginated_by_lawyer(lawyer_id, page, per_page, status)
            .await?;

        self.with_details(appointments, total, page, per_page).await
    }

    /// Appointments of a client with lawyer details, newest first.
    pub async fn list_for_client(
        &self,
        client_id: &str,
        page: u64,
        per_page: u64,
        status: Option<&str>,
    ) -> Result<Paginated<AppointmentDetails>, AppError> {
        let status = parse_status_filter(status)?;
        let (appointments, total) = AppointmentRepository::new(self.db)
            .get_paginated_by_client(client_id, page, per_page, status)
            .await?;

        self.with_details(appointments, total, page, per_page).await
    }

    /// Appointment with slot and participants, visible to its participants and admins.
    pub async fn details(
        &self,
        appointment_id: &str,
        viewer: Viewer<'_>,
    ) -> Result<AppointmentDetails, AppError> {
        validate::id(appointment_id)?;

        let appointment = AppointmentRepository::new(self.db)
            .find_by_id(appointment_id)
            .await?
            .filter(|a| viewer.may_view(&a.lawyer_id, &a.client_id))
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        self.load_details(appointment).await
    }

    /// Booking shown on the checkout success page.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetails)` - The paid booking
    /// - `Err(AppError::NotFound)` - Unknown payment or booking of another client
    /// - `Err(AppError::BadRequest)` - Payment older than ten minutes
    pub async fn success_details(
        &self,
        client_id: &str,
        payment_id: &str,
    ) -> Result<AppointmentDetails, AppError> {
        validate::id(payment_id)?;

        let payment = PaymentRepository::new(self.db)
            .find_by_id(payment_id)
            .await?
            .filter(|p| p.client_id == client_id)
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if Utc::now() - payment.created_at > Duration::minutes(SUCCESS_PAGE_WINDOW_MINUTES) {
            return Err(AppError::BadRequest(
                "Payment is older than 10 minutes".to_string(),
            ));
        }

        let appointment = AppointmentRepository::new(self.db)
            .find_by_payment_id(&payment.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        self.load_details(appointment).await
    }

    /// Status change requested by the lawyer of the appointment.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Updated appointment
    /// - `Err(AppError::BadRequest)` - Invalid status, manual `payment-pending` or
    ///   appointment already closed
    /// - `Err(AppError::NotFound)` - No such appointment for the lawyer
    pub async fn update_status_by_lawyer(
        &self,
        lawyer_id: &str,
        dto: UpdateAppointmentDto,
    ) -> Result<Appointment, AppError> {
        validate::required(&[
            ("appointment_id", dto.appointment_id.as_deref()),
            ("status", dto.status.as_deref()),
        ])?;
        let appointment_id = dto.appointment_id.unwrap_or_default();
        validate::id(&appointment_id)?;
        let status =
            validate::one_of::<AppointmentStatus>("status", dto.status.as_deref().unwrap_or_default())?;

        if status == AppointmentStatus::PaymentPending {
            return Err(AppError::BadRequest(
                "Status payment-pending cannot be set manually".to_string(),
            ));
        }

        let appointment = self
            .find_open(&appointment_id, Viewer::Lawyer(lawyer_id))
            .await?;

        if status == AppointmentStatus::Cancelled {
            return self.cancel(appointment, None, CancelReason::Requested).await;
        }

        let updated = AppointmentRepository::new(self.db)
            .update_status(&appointment.id, status, None)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        tracing::info!("Lawyer {} set appointment {} to {:?}", lawyer_id, updated.id, status);

        if status == AppointmentStatus::Confirmed {
            self.notify(
                Recipient::Client(&updated.client_id),
                &updated.id,
                NotificationType::AppointmentConfirmed,
                CONFIRMED_MESSAGE,
            )
            .await?;
        }

        Ok(updated)
    }

    /// Cancellation requested by the client of the appointment.
    ///
    /// `cancelled` is the only status a client may set.
    pub async fn cancel_by_client(
        &self,
        client_id: &str,
        dto: UpdateAppointmentDto,
    ) -> Result<Appointment, AppError> {
        validate::required(&[
            ("appointment_id", dto.appointment_id.as_deref()),
            ("status", dto.status.as_deref()),
        ])?;
        let appointment_id = dto.appointment_id.unwrap_or_default();
        validate::id(&appointment_id)?;
        let status =
            validate::one_of::<AppointmentStatus>("status", dto.status.as_deref().unwrap_or_default())?;
        if status != AppointmentStatus::Cancelled {
            return Err(AppError::Forbidden(
                "Clients may only cancel appointments".to_string(),
            ));
        }

        let notes = dto
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(notes) = &notes {
            validate::length("notes", notes, 1, 500)?;
        }

        let appointment = self
            .find_open(&appointment_id, Viewer::Client(client_id))
            .await?;
        let lawyer_id = appointment.lawyer_id.clone();

        let cancelled = self.cancel(appointment, notes, CancelReason::Requested).await?;

        self.notify(
            Recipient::Lawyer(&lawyer_id),
            &cancelled.id,
            NotificationType::AppointmentCanceled,
            CLIENT_CANCELLED_LAWYER_MESSAGE,
        )
        .await?;

        Ok(cancelled)
    }

    /// Cancels an appointment and undoes what the booking set up.
    ///
    /// A captured payment is refunded first; if the provider refuses, the error
    /// is returned and the appointment stays open. A payment still awaiting
    /// checkout is marked failed. Then the client is notified, the video section
    /// is cancelled and the slot is released when no other active appointment
    /// holds it.
    pub async fn cancel(
        &self,
        appointment: Appointment,
        notes: Option<String>,
        reason: CancelReason,
    ) -> Result<Appointment, AppError> {
        let refunded = self.settle_payment(&appointment).await?;

        let cancelled = AppointmentRepository::new(self.db)
            .update_status(&appointment.id, AppointmentStatus::Cancelled, notes)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        tracing::info!("Cancelled appointment {}", cancelled.id);

        let message = match reason {
            CancelReason::LawyerUnavailable => LAWYER_UNAVAILABLE_MESSAGE,
            CancelReason::Requested if refunded => CANCELLED_MESSAGE,
            CancelReason::Requested => UNPAID_CANCELLED_MESSAGE,
        };
        self.notify(
            Recipient::Client(&cancelled.client_id),
            &cancelled.id,
            NotificationType::AppointmentCanceled,
            message,
        )
        .await?;

        VideoSectionRepository::new(self.db)
            .set_status_by_appointment(&cancelled.id, VideoSectionStatus::Cancelled)
            .await?;

        self.release_slot(&cancelled).await?;

        Ok(cancelled)
    }

    /// Drops a booking whose checkout was never completed.
    ///
    /// Nothing was captured, so there is no refund and nobody is notified. A
    /// booking confirmed in the meantime is left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - The booking was cancelled and its payment marked failed
    /// - `Ok(false)` - The booking no longer awaits payment
    pub async fn expire_checkout(&self, appointment: &Appointment) -> Result<bool, AppError> {
        let expired = AppointmentRepository::new(self.db)
            .set_status_if(
                &appointment.id,
                AppointmentStatus::PaymentPending,
                AppointmentStatus::Cancelled,
            )
            .await?;
        if !expired {
            return Ok(false);
        }

        PaymentRepository::new(self.db)
            .set_status_if(
                &appointment.payment_id,
                PaymentStatus::Pending,
                PaymentStatus::Failed,
            )
            .await?;
        VideoSectionRepository::new(self.db)
            .set_status_by_appointment(&appointment.id, VideoSectionStatus::Cancelled)
            .await?;

        self.release_slot(appointment).await?;

        tracing::info!(
            "Checkout of appointment {} expired, payment {} failed",
            appointment.id,
            appointment.payment_id
        );

        Ok(true)
    }

    /// Refunds payments still captured for cancelled appointments.
    ///
    /// Failures are logged and left for the next run.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of payments refunded
    /// - `Err(AppError)` - Database error while listing them
    pub async fn retry_refunds(&self) -> Result<u64, AppError> {
        let stranded = AppointmentRepository::new(self.db)
            .get_cancelled_with_captured_payment()
            .await?;

        let mut refunded = 0;
        for appointment in stranded {
            match self.refund(&appointment).await {
                Ok(true) => refunded += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(
                    "Refund for cancelled appointment {} failed: {}",
                    appointment.id,
                    e
                ),
            }
        }

        Ok(refunded)
    }

    /// Marks the session in `room_id` completed once it has started.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Completed appointment
    /// - `Err(AppError::NotFound)` - Unknown room or room of another lawyer
    /// - `Err(AppError::BadRequest)` - Session has not started yet
    pub async fn complete_session(
        &self,
        lawyer_id: &str,
        room_id: &str,
    ) -> Result<Appointment, AppError> {
        let sections = VideoSectionRepository::new(self.db);
        let section = sections
            .find_by_room_id(room_id)
            .await?
            .filter(|s| s.lawyer_id == lawyer_id)
            .ok_or_else(|| AppError::NotFound("Invalid Room Id".to_string()))?;

        if Utc::now() < section.start_time {
            return Err(AppError::BadRequest(
                "Session has not started yet".to_string(),
            ));
        }

        let appointment = AppointmentRepository::new(self.db)
            .update_status(&section.appointment_id, AppointmentStatus::Completed, None)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;
        sections.complete(room_id).await?;

        tracing::info!("Session {} of appointment {} completed", room_id, appointment.id);

        Ok(appointment)
    }

    /// Distinct clients that booked the lawyer.
    pub async fn clients_of_lawyer(
        &self,
        lawyer_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Client>, AppError> {
        let client_ids = AppointmentRepository::new(self.db)
            .client_ids_for_lawyer(lawyer_id)
            .await?;

        let (clients, total) = ClientRepository::new(self.db)
            .get_paginated_by_ids(client_ids, page, per_page)
            .await?;

        Ok(Paginated::new(clients, total, page, per_page))
    }

    /// Case history of a client as seen by a lawyer.
    pub async fn history_of_client(
        &self,
        client_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<AppointmentDetails>, AppError> {
        validate::id(client_id)?;
        self.list_for_client(client_id, page, per_page, None).await
    }

    async fn find_open(
        &self,
        appointment_id: &str,
        viewer: Viewer<'_>,
    ) -> Result<Appointment, AppError> {
        let appointment = AppointmentRepository::new(self.db)
            .find_by_id(appointment_id)
            .await?
            .filter(|a| viewer.may_view(&a.lawyer_id, &a.client_id))
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        if appointment.is_closed() {
            return Err(AppError::BadRequest(
                "Appointment is already closed".to_string(),
            ));
        }

        Ok(appointment)
    }

    /// Undoes the payment of a booking about to be cancelled.
    ///
    /// # Returns
    /// - `Ok(true)` - A captured payment was refunded
    /// - `Ok(false)` - Nothing had been captured; a pending payment is now failed
    async fn settle_payment(&self, appointment: &Appointment) -> Result<bool, AppError> {
        let abandoned = PaymentRepository::new(self.db)
            .set_status_if(
                &appointment.payment_id,
                PaymentStatus::Pending,
                PaymentStatus::Failed,
            )
            .await?;
        if abandoned {
            return Ok(false);
        }

        self.refund(appointment).await
    }

    /// Refunds the captured payment of an appointment, if any.
    async fn refund(&self, appointment: &Appointment) -> Result<bool, AppError> {
        let payments = PaymentRepository::new(self.db);
        let Some(payment) = payments.find_by_id(&appointment.payment_id).await? else {
            return Ok(false);
        };
        let Some(transaction_id) = payment.refundable_transaction() else {
            return Ok(false);
        };

        self.gateway.refund(transaction_id, payment.amount).await?;
        payments.set_status(&payment.id, PaymentStatus::Refunded).await?;

        tracing::info!("Refunded payment {} of appointment {}", payment.id, appointment.id);

        Ok(true)
    }

    /// Closes a checkout session whose booking lost the race for the slot.
    async fn abandon_checkout(&self, session_id: &str) -> AppError {
        if let Err(e) = self.gateway.expire_checkout_session(session_id).await {
            tracing::warn!("Failed to expire checkout session {}: {}", session_id, e);
        }

        AppError::Conflict("Slot already booked".to_string())
    }

    /// Frees the slot when no other active appointment holds it.
    pub async fn release_slot(&self, appointment: &Appointment) -> Result<(), AppError> {
        let in_use = AppointmentRepository::new(self.db)
            .slot_in_use(&appointment.slot_id, &appointment.id)
            .await?;

        if !in_use {
            SlotRepository::new(self.db)
                .set_status(&appointment.slot_id, SlotStatus::Available)
                .await?;
        }

        Ok(())
    }

    async fn notify(
        &self,
        recipient: Recipient<'_>,
        appointment_id: &str,
        kind: NotificationType,
        message: &str,
    ) -> Result<(), AppError> {
        NotificationService::new(self.db, self.hub)
            .create(CreateNotificationParams {
                recipient,
                appointment_id: Some(appointment_id),
                kind,
                message: message.to_string(),
            })
            .await?;

        Ok(())
    }

    async fn load_details(&self, appointment: Appointment) -> Result<AppointmentDetails, AppError> {
        let lawyer = LawyerRepository::new(self.db)
            .find_by_id(&appointment.lawyer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lawyer not found".to_string()))?;
        let client = ClientRepository::new(self.db)
            .find_by_id(&appointment.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;
        let slot = SlotRepository::new(self.db)
            .find_by_id(&appointment.slot_id)
            .await?;

        Ok(AppointmentDetails {
            appointment,
            slot,
            lawyer,
            client,
        })
    }

    async fn with_details(
        &self,
        appointments: Vec<Appointment>,
        total: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<AppointmentDetails>, AppError> {
        let mut items = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            items.push(self.load_details(appointment).await?);
        }

        Ok(Paginated::new(items, total, page, per_page))
    }
}

fn parse_status_filter(status: Option<&str>) -> Result<Option<AppointmentStatus>, AppError> {
    status
        .filter(|s| !s.trim().is_empty())
        .map(|s| validate::one_of::<AppointmentStatus>("status", s.trim()))
        .transpose()
}
