// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Horizon enumeration for candidate start days.
//!
//! The horizon runs from "today" through today plus four months, padded
//! by one day per leg. Upstream feeds only publish roughly four months
//! ahead; the trailing pad keeps the last candidate's final leg inside
//! the range for which a hut could have published availability.

use chrono::{Datelike, Months, NaiveDate};
use hut_tour_domain::{DayKey, DomainError};

/// How far ahead of "today" candidate start days are generated.
const HORIZON_MONTHS: u32 = 4;

/// Enumerates every candidate start day in the horizon, in calendar order.
///
/// The range is inclusive on both ends: today itself is the first
/// candidate and the padded horizon end is the last.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the horizon end falls
/// outside the representable calendar range. This cannot occur for any
/// present-day `today`.
pub fn horizon_days(today: DayKey, leg_count: usize) -> Result<Vec<DayKey>, DomainError> {
    let end: DayKey = horizon_end(today, leg_count)?;

    let mut days: Vec<DayKey> = Vec::new();
    let mut current: DayKey = today;
    while current <= end {
        days.push(current);
        current = current.plus_days(1)?;
    }

    Ok(days)
}

/// Computes the last candidate start day: today + 4 months + one day per leg.
///
/// Month arithmetic is calendar arithmetic, so a month-end start clamps
/// to the end of the target month (Oct 31 + 4 months is Feb 28, or
/// Feb 29 in a leap year).
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` on calendar-range
/// overflow.
pub fn horizon_end(today: DayKey, leg_count: usize) -> Result<DayKey, DomainError> {
    let padded: DayKey = to_naive(today)
        .and_then(|start| start.checked_add_months(Months::new(HORIZON_MONTHS)))
        .and_then(from_naive)
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("advancing {today} by {HORIZON_MONTHS} months"),
        })?;

    let trailing: u32 =
        u32::try_from(leg_count).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("padding the horizon by {leg_count} legs"),
        })?;

    padded.plus_days(trailing)
}

/// Converts a `DayKey` to a `chrono::NaiveDate` for month arithmetic.
fn to_naive(day: DayKey) -> Option<NaiveDate> {
    let date: time::Date = day.date();
    NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
}

/// Converts a `chrono::NaiveDate` back to a `DayKey`.
fn from_naive(date: NaiveDate) -> Option<DayKey> {
    let month: time::Month = u8::try_from(date.month())
        .ok()
        .and_then(|m| time::Month::try_from(m).ok())?;
    let day_of_month: u8 = u8::try_from(date.day()).ok()?;

    time::Date::from_calendar_date(date.year(), month, day_of_month)
        .ok()
        .map(DayKey::new)
}
