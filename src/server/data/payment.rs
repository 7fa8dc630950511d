use chrono::Utc;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::payment::Payment;

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Payment::from_entity))
    }

    pub async fn set_status(&self, id: &str, status: PaymentStatus) -> Result<(), DbErr> {
        entity::prelude::Payment::update_many()
            .filter(entity::payment::Column::Id.eq(id))
            .col_expr(entity::payment::Column::Status, Expr::value(status))
            .col_expr(entity::payment::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves the payment from `from` to `to`.
    ///
    /// # Returns
    /// - `Ok(true)` - The payment was in `from` and now is in `to`
    /// - `Ok(false)` - The payment is unknown or was in another status
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status_if(
        &self,
        id: &str,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Payment::update_many()
            .filter(entity::payment::Column::Id.eq(id))
            .filter(entity::payment::Column::Status.eq(from))
            .col_expr(entity::payment::Column::Status, Expr::value(to))
            .col_expr(entity::payment::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
