// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Group-size shaping for planner output.
//!
//! The matcher always returns raw per-date minimum bed figures; whether
//! a date counts as "tour found" for a particular party is decided here,
//! by the consumer-facing threshold helpers.

use hut_tour_domain::TourOption;
use serde::{Deserialize, Serialize};

/// The smallest accepted group size.
pub const MIN_GROUP_SIZE: u32 = 1;

/// The largest accepted group size.
pub const MAX_GROUP_SIZE: u32 = 50;

/// The group size assumed when the caller did not state one.
pub const DEFAULT_GROUP_SIZE: u32 = 2;

/// How well a bed count covers a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupFit {
    /// The group fits with at least five spare beds.
    Good,
    /// The group fits, but with fewer than five spare beds.
    Limited,
    /// The bed count is unknown or below the group size.
    None,
}

impl GroupFit {
    /// Converts this fit to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Limited => "limited",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for GroupFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clamps a requested group size into the accepted range.
///
/// An absent request falls back to `DEFAULT_GROUP_SIZE`.
#[must_use]
pub fn clamp_group_size(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_GROUP_SIZE)
        .clamp(MIN_GROUP_SIZE, MAX_GROUP_SIZE)
}

/// Classifies how well a bed count covers a group of the given size.
///
/// An unknown bed count never fits: absence of data is treated as no
/// availability, matching the matcher's classification rules.
#[must_use]
pub const fn group_fit(free_beds: Option<u32>, group_size: u32) -> GroupFit {
    match free_beds {
        None => GroupFit::None,
        Some(beds) if beds < group_size => GroupFit::None,
        Some(beds) if beds - group_size >= 5 => GroupFit::Good,
        Some(_) => GroupFit::Limited,
    }
}

/// Keeps the tour options whose minimum bed count covers the group.
#[must_use]
pub fn filter_by_group_size(options: &[TourOption], group_size: u32) -> Vec<&TourOption> {
    options
        .iter()
        .filter(|option| option.min_available_beds >= group_size)
        .collect()
}
