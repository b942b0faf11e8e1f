// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hut_tour_domain::{DayKey, Hut, HutAvailability, HutStatus, OccupancyBand};
use std::collections::BTreeMap;

pub fn create_test_day(raw: &str) -> DayKey {
    DayKey::parse(raw).unwrap()
}

pub fn create_test_hut(hut_id: i64, hut_name: &str) -> Hut {
    Hut::new(hut_id, String::from(hut_name))
}

pub fn create_test_record(day: &str, free_beds: u32) -> HutAvailability {
    create_record_with(
        day,
        HutStatus::Serviced,
        OccupancyBand::Available,
        Some(free_beds),
    )
}

pub fn create_record_with(
    day: &str,
    status: HutStatus,
    occupancy: OccupancyBand,
    free_beds: Option<u32>,
) -> HutAvailability {
    HutAvailability::new(
        create_test_day(day),
        status,
        occupancy,
        free_beds,
        Some(40),
        BTreeMap::new(),
    )
}
