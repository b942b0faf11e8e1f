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
    clippy::all
)]

mod feed;
mod group;

#[cfg(test)]
mod tests;

pub use feed::{FeedError, RawAvailability, decode_availability};
pub use group::{
    DEFAULT_GROUP_SIZE, GroupFit, MAX_GROUP_SIZE, MIN_GROUP_SIZE, clamp_group_size,
    filter_by_group_size, group_fit,
};
