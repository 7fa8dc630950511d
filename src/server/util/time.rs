//! Slot time arithmetic.
//!
//! Slots are stored as a weekday plus a twelve-hour wall clock string
//! (`"09:30 AM"`). Wall clock times are interpreted as UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use entity::sea_orm_active_enums::Day;

use crate::server::error::internal::InternalError;

/// Length of one consultation.
pub const SESSION_LENGTH_MINUTES: i64 = 60;

/// Sessions of today must start at least this far ahead to be offered or booked.
pub const SAME_DAY_LEAD_MINUTES: i64 = 60;

const SLOT_TIME_FORMAT: &str = "%I:%M %p";

pub const ALL_DAYS: [Day; 7] = [
    Day::Sunday,
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
    Day::Saturday,
];

/// Parses a `HH:MM AM|PM` slot time.
pub fn parse_slot_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), SLOT_TIME_FORMAT).ok()
}

pub fn format_slot_time(time: NaiveTime) -> String {
    time.format(SLOT_TIME_FORMAT).to_string()
}

/// End of the session starting at `start`, wrapping past midnight.
pub fn slot_end_time(start: &str) -> Result<String, InternalError> {
    let start = parse_slot_time(start).ok_or_else(|| InternalError::StoredSlotTime(start.to_string()))?;
    let (end, _) = start.overflowing_add_signed(Duration::minutes(SESSION_LENGTH_MINUTES));
    Ok(format_slot_time(end))
}

/// Start instant of a session held on `date` at `slot_start`.
pub fn session_start(date: NaiveDate, slot_start: &str) -> Result<DateTime<Utc>, InternalError> {
    let time = parse_slot_time(slot_start)
        .ok_or_else(|| InternalError::StoredSlotTime(slot_start.to_string()))?;
    Ok(date.and_time(time).and_utc())
}

pub fn day_of(date: NaiveDate) -> Day {
    match date.weekday() {
        Weekday::Sun => Day::Sunday,
        Weekday::Mon => Day::Monday,
        Weekday::Tue => Day::Tuesday,
        Weekday::Wed => Day::Wednesday,
        Weekday::Thu => Day::Thursday,
        Weekday::Fri => Day::Friday,
        Weekday::Sat => Day::Saturday,
    }
}

/// Position of the day within the week, Sunday first.
pub fn day_index(day: Day) -> usize {
    ALL_DAYS.iter().position(|d| *d == day).unwrap_or(0)
}
