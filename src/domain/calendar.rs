//! Calendar rules shared by the batch routines.
//!
//! Everything here works on local wall-clock values (`NaiveDateTime` and
//! `NaiveDate`), so a "day" is always a calendar day and never a fixed
//! 24 hour span.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

/// Minimum age, in calendar days, before an open auction gets closed.
pub const CLOSING_THRESHOLD_DAYS: u64 = 7;

/// Counts the calendar-day boundaries crossed going from `start` to `end`.
///
/// A cursor starting at `start` advances one calendar day at a time while it
/// is still strictly before `end`, so a partial trailing day counts as a full
/// crossing. Returns 0 when `start` is not before `end`.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    days_between_up_to(start, end, u64::MAX)
}

/// Same count as [`days_between`], but stops once it reaches `limit`.
pub fn days_between_up_to(start: NaiveDateTime, end: NaiveDateTime, limit: u64) -> u64 {
    let mut cursor = start;
    let mut days = 0;
    while cursor < end && days < limit {
        let Some(next) = cursor.checked_add_days(Days::new(1)) else {
            break;
        };
        cursor = next;
        days += 1;
    }
    days
}

/// Whether an auction created at `created_at` is old enough to be closed at `now`.
pub fn started_over_a_week_ago(created_at: NaiveDateTime, now: NaiveDateTime) -> bool {
    days_between_up_to(created_at, now, CLOSING_THRESHOLD_DAYS) >= CLOSING_THRESHOLD_DAYS
}

/// Rolls a weekend date forward to the following Monday.
///
/// Saturday moves two days, Sunday one; weekdays come back unchanged.
/// Returns `None` only if the result falls outside chrono's date range.
pub fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(offset))
}
