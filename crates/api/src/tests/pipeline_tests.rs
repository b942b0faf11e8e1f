// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decode-plan-filter coverage across the full stack.

use crate::{decode_availability, filter_by_group_size};
use hut_tour::find_tour_dates;
use hut_tour_domain::{DayKey, Hut, HutAvailability, TourOption};
use std::collections::HashMap;

#[test]
fn test_feed_payloads_flow_through_planner_and_filter() {
    let first_payload: &str = r#"[
        { "date": "2026-07-05T00:00:00", "hutStatus": "SERVICED", "percentage": "AVAILABLE", "freeBeds": 10 },
        { "date": "2026-07-06T00:00:00", "hutStatus": "SERVICED", "percentage": "FULL", "freeBeds": 14 }
    ]"#;
    let second_payload: &str = r#"[
        { "date": "2026-07-06T00:00:00", "hutStatus": "SERVICED", "percentage": "NEARLY FULL", "freeBeds": 8 }
    ]"#;

    let huts: Vec<Hut> = vec![
        Hut::new(101, String::from("Olpererhütte")),
        Hut::new(102, String::from("Friesenberghaus")),
    ];
    let availability: HashMap<i64, Vec<HutAvailability>> = HashMap::from([
        (101, decode_availability(first_payload).unwrap()),
        (102, decode_availability(second_payload).unwrap()),
    ]);

    let today: DayKey = DayKey::parse("2026-07-01").unwrap();
    let options: Vec<TourOption> = find_tour_dates(&huts, &availability, today).unwrap();

    // One candidate per horizon day: four months plus one day per leg.
    assert_eq!(options.len(), 126);

    // Only the Jul 5 start chains both huts: 10 beds into 8.
    let kept: Vec<&TourOption> = filter_by_group_size(&options, 6);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].start_day, DayKey::parse("2026-07-05").unwrap());
    assert_eq!(kept[0].min_available_beds, 8);
}

#[test]
fn test_failed_fetch_decodes_as_empty_and_plans_as_no_data() {
    // The fetch layer converts a per-hut failure into an empty payload.
    let huts: Vec<Hut> = vec![Hut::new(101, String::from("Olpererhütte"))];
    let availability: HashMap<i64, Vec<HutAvailability>> =
        HashMap::from([(101, decode_availability("[]").unwrap())]);

    let today: DayKey = DayKey::parse("2026-07-01").unwrap();
    let options: Vec<TourOption> = find_tour_dates(&huts, &availability, today).unwrap();

    assert_eq!(options.len(), 125);
    assert!(options.iter().all(|option| option.min_available_beds == 0));
    assert!(filter_by_group_size(&options, 1).is_empty());
}
