// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation-feed decoding.
//!
//! The upstream reservation system delivers one JSON array of hut-day
//! records per hut. This module decodes those payloads into domain
//! records without making feed quirks the matcher's problem: a payload
//! that is not an array at all is an error, but individually malformed
//! records are skipped with a warning so a partially bad feed still
//! yields its good records.

use hut_tour_domain::{DayKey, DomainError, HutAvailability, HutStatus, OccupancyBand};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Feed decoding errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The payload is not a JSON array of records.
    #[error("Failed to decode availability payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// A hut-day record as the reservation feed spells it.
///
/// Mirrors the feed's field names; unknown fields are ignored. Numeric
/// fields are taken as signed because some feeds report sentinel
/// negatives where a count is unknown.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailability {
    /// The record's date stamp, possibly with a time-of-day suffix.
    pub date: String,
    /// The feed's pre-formatted display date. Unused here.
    #[serde(default)]
    pub date_formatted: Option<String>,
    /// The hut's service status.
    pub hut_status: HutStatus,
    /// The reported occupancy band.
    pub percentage: OccupancyBand,
    /// The reported free-bed count.
    #[serde(default)]
    pub free_beds: Option<i64>,
    /// Free beds broken down by bed category.
    #[serde(default)]
    pub free_beds_per_category: BTreeMap<String, i64>,
    /// Total sleeping places in the hut.
    #[serde(default)]
    pub total_sleeping_places: Option<i64>,
}

impl RawAvailability {
    /// Converts this feed record into a domain record.
    ///
    /// The date stamp is normalized to a calendar day; negative or
    /// out-of-range counts become "unknown".
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the date stamp does not
    /// contain a parseable calendar day.
    pub fn into_domain(self) -> Result<HutAvailability, DomainError> {
        let day: DayKey = DayKey::parse(&self.date)?;

        let free_beds_per_category: BTreeMap<String, u32> = self
            .free_beds_per_category
            .into_iter()
            .filter_map(|(category, count)| u32::try_from(count).ok().map(|c| (category, c)))
            .collect();

        Ok(HutAvailability::new(
            day,
            self.hut_status,
            self.percentage,
            self.free_beds.and_then(|beds| u32::try_from(beds).ok()),
            self.total_sleeping_places
                .and_then(|places| u32::try_from(places).ok()),
            free_beds_per_category,
        ))
    }
}

/// Decodes one hut's availability payload into domain records.
///
/// Individually malformed records (bad date stamp, unknown status or
/// band spelling) are skipped with a warning rather than failing the
/// payload; the matcher treats the missing days as ordinary "no data".
///
/// # Arguments
///
/// * `payload` - The raw JSON array the reservation feed returned
///
/// # Errors
///
/// Returns `FeedError::InvalidPayload` if the payload as a whole is not
/// a JSON array.
pub fn decode_availability(payload: &str) -> Result<Vec<HutAvailability>, FeedError> {
    let raw_records: Vec<serde_json::Value> = serde_json::from_str(payload)?;

    let mut records: Vec<HutAvailability> = Vec::with_capacity(raw_records.len());
    for value in raw_records {
        let raw: RawAvailability = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!("Skipping malformed availability record: {error}");
                continue;
            }
        };

        match raw.into_domain() {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!("Skipping availability record: {error}");
            }
        }
    }

    Ok(records)
}
