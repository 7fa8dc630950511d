//! Appointment data repository.
//!
//! Besides plain queries this repository owns the two multi-table writes of the
//! booking workflow: creating a booking (slot, payment, appointment and video
//! section in one transaction) and recording a captured payment.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    AppointmentStatus, PaymentStatus, SlotStatus, VideoSectionStatus,
};
use sea_orm::{
    sea_query::{Expr, Query}, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    appointment::{
        Appointment, NewBooking, ACTIVE_STATUSES, CONSULTATION_CURRENCY, CONSULTATION_FEE,
    },
    payment::PaymentCapture,
};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a new booking in a single transaction.
    ///
    /// Marks the slot booked, inserts a pending payment referencing the checkout
    /// session, inserts the appointment as `payment-pending` and inserts its
    /// pending video section. Nothing is written if any step fails or if another
    /// active appointment already holds the slot on the booking date.
    ///
    /// # Arguments
    /// - `booking` - Ids, participants, slot and session times of the booking
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The created appointment
    /// - `Ok(None)` - The slot was taken for that date in the meantime
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn create_booking(&self, booking: NewBooking) -> Result<Option<Appointment>, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let taken = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::SlotId.eq(&booking.slot.id))
            .filter(entity::appointment::Column::AppointmentDate.eq(booking.params.date))
            .filter(entity::appointment::Column::Status.is_in(ACTIVE_STATUSES))
            .count(&txn)
            .await?;
        if taken > 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        entity::prelude::Slot::update_many()
            .filter(entity::slot::Column::Id.eq(&booking.slot.id))
            .col_expr(entity::slot::Column::Status, Expr::value(SlotStatus::Booked))
            .exec(&txn)
            .await?;

        entity::payment::ActiveModel {
            id: ActiveValue::Set(booking.payment_id.clone()),
            appointment_id: ActiveValue::Set(booking.appointment_id.clone()),
            client_id: ActiveValue::Set(booking.client.id.clone()),
            order_id: ActiveValue::Set(Some(booking.checkout_session_id)),
            transaction_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(CONSULTATION_FEE),
            currency: ActiveValue::Set(CONSULTATION_CURRENCY.to_string()),
            status: ActiveValue::Set(PaymentStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        let appointment = entity::appointment::ActiveModel {
            id: ActiveValue::Set(booking.appointment_id.clone()),
            lawyer_id: ActiveValue::Set(booking.lawyer.id.clone()),
            client_id: ActiveValue::Set(booking.client.id.clone()),
            slot_id: ActiveValue::Set(booking.slot.id.clone()),
            appointment_type: ActiveValue::Set(booking.params.appointment_type),
            appointment_date: ActiveValue::Set(booking.params.date),
            reason: ActiveValue::Set(booking.params.reason),
            notes: ActiveValue::Set(booking.params.notes),
            status: ActiveValue::Set(AppointmentStatus::PaymentPending),
            payment_id: ActiveValue::Set(booking.payment_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        entity::video_section::ActiveModel {
            id: ActiveValue::Set(crate::server::util::id::new_id()),
            appointment_id: ActiveValue::Set(booking.appointment_id),
            lawyer_id: ActiveValue::Set(booking.lawyer.id),
            client_id: ActiveValue::Set(booking.client.id),
            lawyer_name: ActiveValue::Set(booking.lawyer.name),
            client_name: ActiveValue::Set(booking.client.name),
            lawyer_profile: ActiveValue::Set(booking.lawyer.profile_image),
            client_profile: ActiveValue::Set(booking.client.profile_image),
            start_time: ActiveValue::Set(booking.session_start),
            end_time: ActiveValue::Set(booking.session_end),
            room_id: ActiveValue::Set(booking.room_id),
            status: ActiveValue::Set(VideoSectionStatus::Pending),
            created_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(Appointment::from_entity(appointment)))
    }

    /// Records a captured payment and confirms its appointment if still awaiting payment.
    ///
    /// Only a pending or failed payment is moved to completed, so a repeated
    /// provider event changes nothing. The appointment is confirmed only while it
    /// is `payment-pending`; a booking that was closed in the meantime keeps its
    /// status and is reported as `Closed` so the caller can refund the capture.
    ///
    /// # Arguments
    /// - `payment_id` - Payment that was captured
    /// - `transaction_id` - Gateway transaction reference, kept for refunds
    ///
    /// # Returns
    /// - `Ok(PaymentCapture)` - What the capture changed
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn capture_payment(
        &self,
        payment_id: &str,
        transaction_id: Option<&str>,
    ) -> Result<PaymentCapture, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let mut payment_update = entity::prelude::Payment::update_many()
            .filter(entity::payment::Column::Id.eq(payment_id))
            .filter(
                entity::payment::Column::Status
                    .is_in([PaymentStatus::Pending, PaymentStatus::Failed]),
            )
            .col_expr(
                entity::payment::Column::Status,
                Expr::value(PaymentStatus::Completed),
            )
            .col_expr(entity::payment::Column::UpdatedAt, Expr::value(now));
        if let Some(transaction_id) = transaction_id {
            payment_update = payment_update.col_expr(
                entity::payment::Column::TransactionId,
                Expr::value(transaction_id),
            );
        }
        if payment_update.exec(&txn).await?.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(PaymentCapture::Ignored);
        }

        let confirmed = entity::prelude::Appointment::update_many()
            .filter(entity::appointment::Column::PaymentId.eq(payment_id))
            .filter(entity::appointment::Column::Status.eq(AppointmentStatus::PaymentPending))
            .col_expr(
                entity::appointment::Column::Status,
                Expr::value(AppointmentStatus::Confirmed),
            )
            .col_expr(entity::appointment::Column::UpdatedAt, Expr::value(now))
            .exec(&txn)
            .await?
            .rows_affected
            > 0;

        let Some(appointment) = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PaymentId.eq(payment_id))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(PaymentCapture::Ignored);
        };

        txn.commit().await?;

        let appointment = Appointment::from_entity(appointment);
        Ok(if confirmed {
            PaymentCapture::Confirmed(appointment)
        } else {
            PaymentCapture::Closed(appointment)
        })
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    pub async fn find_by_payment_id(&self, payment_id: &str) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PaymentId.eq(payment_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Checks whether an active appointment holds the slot on `date`.
    pub async fn slot_taken_on(&self, slot_id: &str, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::SlotId.eq(slot_id))
            .filter(entity::appointment::Column::AppointmentDate.eq(date))
            .filter(entity::appointment::Column::Status.is_in(ACTIVE_STATUSES))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any active appointment other than `excluding` uses the slot.
    pub async fn slot_in_use(&self, slot_id: &str, excluding: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::SlotId.eq(slot_id))
            .filter(entity::appointment::Column::Id.ne(excluding))
            .filter(entity::appointment::Column::Status.is_in(ACTIVE_STATUSES))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Ids of the lawyer's slots held by an active appointment on `date`.
    pub async fn taken_slot_ids_on(
        &self,
        lawyer_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::Appointment::find()
            .select_only()
            .column(entity::appointment::Column::SlotId)
            .filter(entity::appointment::Column::LawyerId.eq(lawyer_id))
            .filter(entity::appointment::Column::AppointmentDate.eq(date))
            .filter(entity::appointment::Column::Status.is_in(ACTIVE_STATUSES))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Active appointments held on any of the given slots.
    pub async fn get_active_for_slots(
        &self,
        slot_ids: Vec<String>,
    ) -> Result<Vec<Appointment>, DbErr> {
        if slot_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::SlotId.is_in(slot_ids))
            .filter(entity::appointment::Column::Status.is_in(ACTIVE_STATUSES))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Gets a lawyer's appointments with pagination, newest first.
    ///
    /// Appointments still awaiting payment are never listed.
    ///
    /// # Arguments
    /// - `lawyer_id` - Lawyer whose appointments to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of appointments per page
    /// - `status` - Optional status to restrict to
    ///
    /// # Returns
    /// - `Ok((appointments, total))` - Appointments on the page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated_by_lawyer(
        &self,
        lawyer_id: &str,
        page: u64,
        per_page: u64,
        status: Option<AppointmentStatus>,
    ) -> Result<(Vec<Appointment>, u64), DbErr> {
        self.get_paginated(
            entity::appointment::Column::LawyerId,
            lawyer_id,
            page,
            per_page,
            status,
        )
        .await
    }

    /// Gets a client's appointments with pagination, newest first.
    ///
    /// Same rules as `get_paginated_by_lawyer`.
    pub async fn get_paginated_by_client(
        &self,
        client_id: &str,
        page: u64,
        per_page: u64,
        status: Option<AppointmentStatus>,
    ) -> Result<(Vec<Appointment>, u64), DbErr> {
        self.get_paginated(
            entity::appointment::Column::ClientId,
            client_id,
            page,
            per_page,
            status,
        )
        .await
    }

    async fn get_paginated(
        &self,
        owner_column: entity::appointment::Column,
        owner_id: &str,
        page: u64,
        per_page: u64,
        status: Option<AppointmentStatus>,
    ) -> Result<(Vec<Appointment>, u64), DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(owner_column.eq(owner_id))
            .filter(entity::appointment::Column::Status.ne(AppointmentStatus::PaymentPending));

        if let Some(status) = status {
            query = query.filter(entity::appointment::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::appointment::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Appointment::from_entity).collect(),
            total,
        ))
    }

    /// Distinct ids of clients holding a paid appointment with the lawyer.
    pub async fn client_ids_for_lawyer(&self, lawyer_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Appointment::find()
            .select_only()
            .column(entity::appointment::Column::ClientId)
            .distinct()
            .filter(entity::appointment::Column::LawyerId.eq(lawyer_id))
            .filter(entity::appointment::Column::Status.ne(AppointmentStatus::PaymentPending))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Sets the status and, when given, the notes of an appointment.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Updated appointment
    /// - `Ok(None)` - No appointment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
        notes: Option<String>,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::appointment::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status);
        if let Some(notes) = notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Appointment::from_entity(entity)))
    }

    /// Appointments still awaiting payment that were created before `cutoff`.
    pub async fn get_stale_payment_pending(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Status.eq(AppointmentStatus::PaymentPending))
            .filter(entity::appointment::Column::CreatedAt.lt(cutoff))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Moves the appointment from `from` to `to`.
    ///
    /// # Returns
    /// - `Ok(true)` - The appointment was in `from` and now is in `to`
    /// - `Ok(false)` - The appointment is unknown or was in another status
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status_if(
        &self,
        id: &str,
        from: AppointmentStatus,
        to: AppointmentStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::update_many()
            .filter(entity::appointment::Column::Id.eq(id))
            .filter(entity::appointment::Column::Status.eq(from))
            .col_expr(entity::appointment::Column::Status, Expr::value(to))
            .col_expr(entity::appointment::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Cancelled appointments whose payment is still captured.
    pub async fn get_cancelled_with_captured_payment(&self) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Status.eq(AppointmentStatus::Cancelled))
            .filter(
                entity::appointment::Column::PaymentId.in_subquery(
                    Query::select()
                        .column(entity::payment::Column::Id)
                        .from(entity::payment::Entity)
                        .and_where(entity::payment::Column::Status.eq(PaymentStatus::Completed))
                        .to_owned(),
                ),
            )
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }
}
