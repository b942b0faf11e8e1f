// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod horizon;
mod index;
mod planner;

#[cfg(test)]
mod tests;

use hut_tour_domain::DayKey;
use time::OffsetDateTime;

// Re-export public types and functions
pub use index::AvailabilityIndex;
pub use planner::find_tour_dates;

/// Returns the current UTC calendar day.
///
/// The planner takes "today" as an explicit parameter rather than reading
/// the clock itself, so callers can fix the horizon start in tests. This
/// is the wall-clock capability for production callers.
#[must_use]
pub fn today_utc() -> DayKey {
    DayKey::new(OffsetDateTime::now_utc().date())
}
