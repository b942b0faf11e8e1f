// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour-date matching.
//!
//! This module produces one itinerary candidate per calendar day in the
//! horizon, for an ordered hut selection and a per-hut availability map.
//!
//! ## Invariants
//!
//! - Leg *i* of a candidate occurs on `start_day + i` calendar days.
//! - Every candidate has one leg per selected hut, in selection order.
//! - Candidates are emitted in ascending start-day order with no gaps:
//!   every horizon day yields exactly one candidate, even when no data
//!   exists for it.
//! - Data anomalies (missing hut entries, duplicate-dated records, null
//!   bed counts, non-serviced statuses) normalize to zero effective beds
//!   and never fail the computation.
//!
//! ## Usage
//!
//! The computation is stateless and synchronous. It is cheap enough to
//! re-run on every selection or group-size change; the caller owns
//! discarding superseded results.

use crate::horizon::horizon_days;
use crate::index::AvailabilityIndex;
use hut_tour_domain::{
    DayKey, DomainError, Hut, HutAvailability, TourLeg, TourOption, effective_beds,
};
use std::collections::HashMap;

/// Produces one `TourOption` per candidate start day across the horizon.
///
/// For each start day *d*, leg *i* is matched against hut *i*'s record
/// for `d + i` days, classified into an effective bed count, and folded
/// into the itinerary's minimum. Placeholder huts (negative id) appear in
/// the legs with no record but are exempt from the fold; they stand for
/// huts the user has knowingly left unresolved. If every leg is a
/// placeholder the fold is empty and the minimum is 0.
///
/// # Arguments
///
/// * `huts` - The ordered hut selection, one hut per tour day
/// * `availability` - Per-hut record lists keyed by `hut_id`; missing
///   keys mean "no data" for that hut
/// * `today` - The first candidate start day (the horizon start)
///
/// # Returns
///
/// Itinerary candidates in ascending start-day order, one per calendar
/// day from `today` through `today + 4 months + huts.len()` days. An
/// empty hut selection returns an empty list.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` only on calendar-range
/// overflow in horizon arithmetic, never for data anomalies.
///
/// # Example
///
/// ```text
/// huts = [Olpererhütte, Friesenberghaus]
/// availability = {
///     Olpererhütte:    [Jul 5: 10 beds],
///     Friesenberghaus: [Jul 6: 8 beds],
/// }
///
/// Start Jul 4: legs Jul 4 / Jul 5 -> no record for Olpererhütte -> 0 beds
/// Start Jul 5: legs Jul 5 / Jul 6 -> min(10, 8)                 -> 8 beds
/// Start Jul 6: legs Jul 6 / Jul 7 -> no record for Olpererhütte -> 0 beds
/// ```
pub fn find_tour_dates(
    huts: &[Hut],
    availability: &HashMap<i64, Vec<HutAvailability>>,
    today: DayKey,
) -> Result<Vec<TourOption>, DomainError> {
    if huts.is_empty() {
        return Ok(Vec::new());
    }

    let indices: Vec<AvailabilityIndex<'_>> = huts
        .iter()
        .map(|hut| {
            let records: &[HutAvailability] =
                availability.get(&hut.hut_id).map_or(&[], Vec::as_slice);
            AvailabilityIndex::build(records)
        })
        .collect();

    let days: Vec<DayKey> = horizon_days(today, huts.len())?;
    let mut options: Vec<TourOption> = Vec::with_capacity(days.len());

    for start_day in days {
        options.push(build_option(huts, &indices, start_day)?);
    }

    Ok(options)
}

/// Builds the itinerary candidate for a single start day.
fn build_option(
    huts: &[Hut],
    indices: &[AvailabilityIndex<'_>],
    start_day: DayKey,
) -> Result<TourOption, DomainError> {
    let mut legs: Vec<TourLeg> = Vec::with_capacity(huts.len());
    let mut min_available_beds: Option<u32> = None;
    let mut leg_day: DayKey = start_day;

    for (leg_index, (hut, index)) in huts.iter().zip(indices).enumerate() {
        if leg_index > 0 {
            leg_day = leg_day.plus_days(1)?;
        }

        let record: Option<&HutAvailability> = index.get(leg_day);

        if !hut.is_placeholder() {
            let beds: u32 = effective_beds(record);
            min_available_beds = Some(min_available_beds.map_or(beds, |current| current.min(beds)));
        }

        legs.push(TourLeg::new(hut.clone(), record.cloned()));
    }

    Ok(TourOption::new(
        start_day,
        legs,
        min_available_beds.unwrap_or(0),
    ))
}
