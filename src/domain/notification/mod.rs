// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.

pub mod newtypes;

pub use newtypes::{
    duration_bounds, history_capacity_bounds, max_visible_bounds, spacing_bounds,
    tick_interval_bounds, DisplayDuration, HistoryCapacity, MaxVisible, Spacing, TickInterval,
};
