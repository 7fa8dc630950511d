use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Stores an OTP for `email` expiring at `expires_at`.
pub async fn create_otp_expiring(
    db: &DatabaseConnection,
    email: &str,
    code: &str,
    expires_at: DateTime<Utc>,
) -> Result<entity::otp::Model, DbErr> {
    entity::otp::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        code: ActiveValue::Set(code.to_string()),
        expires_at: ActiveValue::Set(expires_at),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Stores an OTP for `email` valid for five minutes.
pub async fn create_otp(
    db: &DatabaseConnection,
    email: &str,
    code: &str,
) -> Result<entity::otp::Model, DbErr> {
    create_otp_expiring(db, email, code, Utc::now() + Duration::minutes(5)).await
}
