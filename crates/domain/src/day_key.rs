// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day keys for availability lookups.
//!
//! Upstream feeds stamp records with full timestamps in whatever timezone
//! the reservation system runs in. Matching happens on calendar-day
//! identity only, so every date string is reduced to its `YYYY-MM-DD`
//! prefix before it is compared or used as a lookup key. `DayKey` is the
//! single place that reduction happens.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;

const DAY_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// A normalized calendar day.
///
/// Ordered, hashable, and displayed as `YYYY-MM-DD`. Time-of-day and
/// timezone suffixes are stripped during parsing; two records stamped
/// `2026-07-14T00:00:00` and `2026-07-14` key identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    day: Date,
}

impl DayKey {
    /// Creates a `DayKey` from an already-resolved calendar date.
    #[must_use]
    pub const fn new(day: Date) -> Self {
        Self { day }
    }

    /// Parses a `DayKey` from an upstream date string.
    ///
    /// Any `T` or space time-of-day suffix is truncated before parsing,
    /// so full timestamps normalize to their calendar day.
    ///
    /// # Arguments
    ///
    /// * `raw` - The date string (`YYYY-MM-DD`, optionally followed by a
    ///   time-of-day suffix)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the calendar-day portion
    /// does not parse as `YYYY-MM-DD`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let day_part: &str = raw.split(['T', ' ']).next().unwrap_or(raw);

        Date::parse(day_part, DAY_FORMAT)
            .map(Self::new)
            .map_err(|e| DomainError::DateParseError {
                date_string: raw.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.day
    }

    /// Returns the day `days` calendar days after this one.
    ///
    /// This is calendar-day arithmetic, not elapsed-time arithmetic, so
    /// month, year, and leap-day boundaries are crossed exactly.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the result falls
    /// outside the representable calendar range.
    pub fn plus_days(self, days: u32) -> Result<Self, DomainError> {
        self.day
            .checked_add(time::Duration::days(i64::from(days)))
            .map(Self::new)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("adding {days} days to {self}"),
            })
    }

    /// Returns the number of calendar days from this day to `other`.
    ///
    /// Negative if `other` is earlier.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        i64::from(other.day.to_julian_day()) - i64::from(self.day.to_julian_day())
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted: String = self.day.format(DAY_FORMAT).map_err(|_| std::fmt::Error)?;
        write!(f, "{formatted}")
    }
}

impl Serialize for DayKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_calendar_day() {
        let day: DayKey = DayKey::parse("2026-07-14").unwrap();
        assert_eq!(format!("{day}"), "2026-07-14");
    }

    #[test]
    fn test_parse_truncates_time_suffix() {
        let plain: DayKey = DayKey::parse("2026-07-14").unwrap();
        let midnight: DayKey = DayKey::parse("2026-07-14T00:00:00").unwrap();
        let zoned: DayKey = DayKey::parse("2026-07-14T12:30:00+02:00").unwrap();
        let spaced: DayKey = DayKey::parse("2026-07-14 08:15:00").unwrap();

        assert_eq!(plain, midnight);
        assert_eq!(plain, zoned);
        assert_eq!(plain, spaced);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result: Result<DayKey, DomainError> = DayKey::parse("not-a-date");
        assert!(matches!(
            result.unwrap_err(),
            DomainError::DateParseError { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_month() {
        let result: Result<DayKey, DomainError> = DayKey::parse("2026-13-01");
        assert!(matches!(
            result.unwrap_err(),
            DomainError::DateParseError { .. }
        ));
    }

    #[test]
    fn test_ordering_follows_the_calendar() {
        let earlier: DayKey = DayKey::parse("2026-07-14").unwrap();
        let later: DayKey = DayKey::parse("2026-07-15").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_plus_days_crosses_month_boundary() {
        let day: DayKey = DayKey::parse("2026-01-31").unwrap();
        let next: DayKey = day.plus_days(1).unwrap();
        assert_eq!(format!("{next}"), "2026-02-01");
    }

    #[test]
    fn test_plus_days_crosses_year_boundary() {
        let day: DayKey = DayKey::parse("2026-12-31").unwrap();
        let next: DayKey = day.plus_days(1).unwrap();
        assert_eq!(format!("{next}"), "2027-01-01");
    }

    #[test]
    fn test_plus_days_handles_leap_day() {
        let leap: DayKey = DayKey::parse("2028-02-28").unwrap();
        assert_eq!(format!("{}", leap.plus_days(1).unwrap()), "2028-02-29");

        let common: DayKey = DayKey::parse("2027-02-28").unwrap();
        assert_eq!(format!("{}", common.plus_days(1).unwrap()), "2027-03-01");
    }

    #[test]
    fn test_days_until() {
        let start: DayKey = DayKey::parse("2026-07-01").unwrap();
        let end: DayKey = DayKey::parse("2026-08-01").unwrap();
        assert_eq!(start.days_until(end), 31);
        assert_eq!(end.days_until(start), -31);
        assert_eq!(start.days_until(start), 0);
    }

    #[test]
    fn test_serde_round_trip_as_display_string() {
        let day: DayKey = DayKey::parse("2026-07-14").unwrap();
        let value: serde_json::Value = serde_json::to_value(day).unwrap();
        assert_eq!(value, serde_json::json!("2026-07-14"));

        let parsed: DayKey = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, day);
    }

    #[test]
    fn test_deserialize_normalizes_timestamp() {
        let parsed: DayKey =
            serde_json::from_value(serde_json::json!("2026-07-14T00:00:00")).unwrap();
        assert_eq!(parsed, DayKey::parse("2026-07-14").unwrap());
    }
}
