// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Effective bed classification.
//!
//! This module folds a hut-day record (or the absence of one) into the
//! single integer bed count the matcher compares across legs.

use crate::types::{HutAvailability, HutStatus, OccupancyBand};

/// Classifies a hut-day record into an effective free-bed count.
///
/// The classification is total: every input, including absence, maps to a
/// defined count. Four ordered, mutually exclusive branches:
///
/// 1. No record for the requested day: 0.
/// 2. Status is not `SERVICED`: 0, regardless of any stale bed count.
/// 3. Occupancy band is `FULL`: 0, trusted over the raw bed count.
/// 4. Otherwise: the reported free-bed count, or 0 if the feed omitted it.
///
/// # Arguments
///
/// * `record` - The hut's record for the requested day, if one exists
///
/// # Returns
///
/// The effective number of free beds for comparison across legs.
#[must_use]
pub fn effective_beds(record: Option<&HutAvailability>) -> u32 {
    match record {
        None => 0,
        Some(record) if record.status != HutStatus::Serviced => 0,
        Some(record) if record.occupancy == OccupancyBand::Full => 0,
        Some(record) => record.free_beds.unwrap_or(0),
    }
}
