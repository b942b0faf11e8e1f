// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hut_tour_domain::{DayKey, HutAvailability};
use std::collections::HashMap;

/// A per-hut lookup from calendar day to availability record.
///
/// Built once per hut from the unordered record list the fetch layer
/// hands over. Lookups are exact calendar-day matches; there is no
/// partial or fuzzy matching. An empty record list builds an empty index
/// and every lookup returns `None`.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex<'a> {
    by_day: HashMap<DayKey, &'a HutAvailability>,
}

impl<'a> AvailabilityIndex<'a> {
    /// Builds an index over one hut's availability records.
    ///
    /// On duplicate days the first-seen record wins; later duplicates are
    /// ignored, preserving the feed's order.
    ///
    /// # Arguments
    ///
    /// * `records` - The hut's availability records, in feed order
    #[must_use]
    pub fn build(records: &'a [HutAvailability]) -> Self {
        let mut by_day: HashMap<DayKey, &'a HutAvailability> =
            HashMap::with_capacity(records.len());

        for record in records {
            by_day.entry(record.day).or_insert(record);
        }

        Self { by_day }
    }

    /// Looks up the record for an exact calendar day.
    #[must_use]
    pub fn get(&self, day: DayKey) -> Option<&'a HutAvailability> {
        self.by_day.get(&day).copied()
    }

    /// Returns the number of distinct days in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    /// Returns whether the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
