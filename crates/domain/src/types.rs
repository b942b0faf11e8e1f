// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::day_key::DayKey;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A hut in the ordered tour selection.
///
/// Negative `hut_id` values denote a user-inserted placeholder leg: a
/// stand-in for a not-yet-chosen or unlisted hut that carries no real
/// availability data. Immutable once selected; the ordered selection is
/// owned by the caller and passed by reference for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hut {
    /// The reservation-system identifier for this hut.
    pub hut_id: i64,
    /// The hut's display name.
    pub hut_name: String,
}

impl Hut {
    /// Creates a new `Hut`.
    ///
    /// # Arguments
    ///
    /// * `hut_id` - The reservation-system identifier (negative for placeholders)
    /// * `hut_name` - The display name
    #[must_use]
    pub const fn new(hut_id: i64, hut_name: String) -> Self {
        Self { hut_id, hut_name }
    }

    /// Returns whether this hut is a user-inserted placeholder leg.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.hut_id < 0
    }
}

/// The service status of a hut on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HutStatus {
    /// The hut is open and serviced; beds may be bookable.
    #[serde(rename = "SERVICED")]
    Serviced,
    /// The hut is out of season or otherwise unserviced.
    #[serde(rename = "NOT_SERVICED")]
    NotServiced,
    /// The hut is closed.
    #[serde(rename = "CLOSED")]
    Closed,
}

impl FromStr for HutStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SERVICED" => Ok(Self::Serviced),
            "NOT_SERVICED" => Ok(Self::NotServiced),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::UnknownHutStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for HutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl HutStatus {
    /// Converts this status to its upstream string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Serviced => "SERVICED",
            Self::NotServiced => "NOT_SERVICED",
            Self::Closed => "CLOSED",
        }
    }
}

/// The occupancy band the reservation system reports for a hut-day.
///
/// The band is trusted over the raw free-bed count: some upstream feeds
/// report stale non-zero `free_beds` on days flagged `FULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyBand {
    /// Beds are freely available.
    #[serde(rename = "AVAILABLE")]
    Available,
    /// Few beds remain. Older feeds spell this band `LIMITED`.
    #[serde(rename = "NEARLY FULL", alias = "LIMITED")]
    NearlyFull,
    /// The hut is fully booked regardless of the reported bed count.
    #[serde(rename = "FULL")]
    Full,
}

impl FromStr for OccupancyBand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(Self::Available),
            "NEARLY FULL" | "LIMITED" => Ok(Self::NearlyFull),
            "FULL" => Ok(Self::Full),
            _ => Err(DomainError::UnknownOccupancyBand(s.to_string())),
        }
    }
}

impl std::fmt::Display for OccupancyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OccupancyBand {
    /// Converts this band to its upstream string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::NearlyFull => "NEARLY FULL",
            Self::Full => "FULL",
        }
    }
}

/// One hut's availability for one calendar day.
///
/// Sourced externally per hut as an unordered sequence; the sequence may
/// be empty, may contain duplicate days, and may omit days entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HutAvailability {
    /// The calendar day this record describes.
    pub day: DayKey,
    /// The hut's service status on that day.
    pub status: HutStatus,
    /// The reported occupancy band.
    pub occupancy: OccupancyBand,
    /// Free beds on that day. `None` means the feed did not report a count.
    pub free_beds: Option<u32>,
    /// Total sleeping places in the hut. Carried but not used for matching.
    pub total_sleeping_places: Option<u32>,
    /// Free beds broken down by bed category. Carried but not used for matching.
    pub free_beds_per_category: BTreeMap<String, u32>,
}

impl HutAvailability {
    /// Creates a new `HutAvailability`.
    ///
    /// # Arguments
    ///
    /// * `day` - The calendar day
    /// * `status` - The hut's service status
    /// * `occupancy` - The reported occupancy band
    /// * `free_beds` - The free-bed count, if reported
    /// * `total_sleeping_places` - Total capacity, if reported
    /// * `free_beds_per_category` - Per-category free-bed counts
    #[must_use]
    pub const fn new(
        day: DayKey,
        status: HutStatus,
        occupancy: OccupancyBand,
        free_beds: Option<u32>,
        total_sleeping_places: Option<u32>,
        free_beds_per_category: BTreeMap<String, u32>,
    ) -> Self {
        Self {
            day,
            status,
            occupancy,
            free_beds,
            total_sleeping_places,
            free_beds_per_category,
        }
    }
}

/// One day of a multi-day tour: a hut and, if the feed published one,
/// its availability record for that day.
///
/// A leg with no matching record carries `None`. Absence is never
/// synthesized into a zero record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourLeg {
    /// The hut scheduled for this leg.
    pub hut: Hut,
    /// The hut's record for this leg's day, if one exists.
    pub availability: Option<HutAvailability>,
}

impl TourLeg {
    /// Creates a new `TourLeg`.
    #[must_use]
    pub const fn new(hut: Hut, availability: Option<HutAvailability>) -> Self {
        Self { hut, availability }
    }
}

/// A prospective trip starting on one calendar day.
///
/// Leg *i* occurs on `start_day + i` calendar days. Constructed fresh per
/// start day and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourOption {
    /// The candidate start day.
    pub start_day: DayKey,
    /// One leg per selected hut, in selection order.
    pub legs: Vec<TourLeg>,
    /// The minimum effective bed count across all non-placeholder legs.
    pub min_available_beds: u32,
}

impl TourOption {
    /// Creates a new `TourOption`.
    ///
    /// # Arguments
    ///
    /// * `start_day` - The candidate start day
    /// * `legs` - One leg per selected hut, in selection order
    /// * `min_available_beds` - The binding bed constraint across legs
    #[must_use]
    pub const fn new(start_day: DayKey, legs: Vec<TourLeg>, min_available_beds: u32) -> Self {
        Self {
            start_day,
            legs,
            min_available_beds,
        }
    }
}
