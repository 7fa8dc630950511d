//! Cron jobs maintaining appointments in the background.

pub mod appointments;
