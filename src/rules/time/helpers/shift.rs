use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::value::{RelativeWeekday, TimeValue};

/// Apply a calendar delta to `reference`.
///
/// Absolute month and day come first, then years and months (clamping the
/// day to the target month), then weeks down to seconds, and the weekday last.
pub fn apply_time_value(value: &TimeValue, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut dt = reference;
    if let Some(month) = value.month {
        dt = with_month(dt, month)?;
    }
    if let Some(day) = value.day {
        dt = with_day(dt, day)?;
    }

    let months = value.years.unwrap_or(0).checked_mul(12)?.checked_add(value.months.unwrap_or(0))?;
    if months != 0 {
        dt = add_months(dt, months)?;
    }

    let offsets = [
        value.weeks.map(|n| Duration::weeks(n.into())),
        value.days.map(|n| Duration::days(n.into())),
        value.hours.map(|n| Duration::hours(n.into())),
        value.minutes.map(|n| Duration::minutes(n.into())),
        value.seconds.map(|n| Duration::seconds(n.into())),
    ];
    for offset in offsets.into_iter().flatten() {
        dt = dt.checked_add_signed(offset)?;
    }

    if let Some(weekday) = value.weekday {
        dt = NaiveDateTime::new(shift_to_weekday(dt.date(), weekday)?, dt.time());
    }
    Some(dt)
}

/// The date `weekday` names relative to `date`.
///
/// A bare weekday is the first occurrence on or after `date`; `n > 0` counts
/// occurrences strictly after it and `n < 0` strictly before it.
pub fn shift_to_weekday(date: NaiveDate, weekday: RelativeWeekday) -> Option<NaiveDate> {
    let target = i64::from(weekday.weekday.num_days_from_monday());
    let current = i64::from(date.weekday().num_days_from_monday());
    let days = match weekday.n {
        None | Some(0) => (target - current).rem_euclid(7),
        Some(n) if n > 0 => {
            let ahead = (target - current).rem_euclid(7);
            let first = if ahead == 0 { 7 } else { ahead };
            first + 7 * (i64::from(n) - 1)
        }
        Some(n) => {
            let behind = (current - target).rem_euclid(7);
            let first = if behind == 0 { 7 } else { behind };
            -(first + 7 * (-i64::from(n) - 1))
        }
    };
    date.checked_add_signed(Duration::days(days))
}

pub fn add_months(dt: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let zero_based = dt.month0() as i32 + months;
    let year = dt.year().checked_add(zero_based.div_euclid(12))?;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = dt.day().min(days_in_month(year, month)?);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(NaiveDateTime::new(date, dt.time()))
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year.checked_add(1)?, 1) } else { (year, month + 1) };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_next.pred_opt().map(|last| last.day())
}

fn with_month(dt: NaiveDateTime, month: u32) -> Option<NaiveDateTime> {
    let day = dt.day().min(days_in_month(dt.year(), month)?);
    let date = NaiveDate::from_ymd_opt(dt.year(), month, day)?;
    Some(NaiveDateTime::new(date, dt.time()))
}

fn with_day(dt: NaiveDateTime, day: u32) -> Option<NaiveDateTime> {
    if day == 0 {
        return None;
    }
    let day = day.min(days_in_month(dt.year(), dt.month())?);
    dt.with_day(day)
}
