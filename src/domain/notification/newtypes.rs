// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for the manager-wide settings and
//! per-request timing values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Capacity Bounds
// =============================================================================

/// Visible notifications per position (1 to 20).
pub mod max_visible_bounds {
    /// Minimum visible count.
    pub const MIN: usize = 1;
    /// Maximum visible count.
    pub const MAX: usize = 20;
    /// Default visible count.
    pub const DEFAULT: usize = 5;
}

/// Maximum number of notifications a single position shows at once.
///
/// Showing one more than this evicts the oldest entry of that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

/// Lifecycle history capacity (8 to 1024 events).
pub mod history_capacity_bounds {
    /// Minimum capacity.
    pub const MIN: usize = 8;
    /// Maximum capacity.
    pub const MAX: usize = 1024;
    /// Default capacity.
    pub const DEFAULT: usize = 64;
}

/// Number of lifecycle events retained by the manager's history journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Stacking gap bounds (0 to 64 pixels).
pub mod spacing_bounds {
    /// Minimum gap.
    pub const MIN: f32 = 0.0;
    /// Maximum gap.
    pub const MAX: f32 = 64.0;
    /// Default gap.
    pub const DEFAULT: f32 = 8.0;
}

/// Gap in pixels between stacked notifications of one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing(f32);

impl Spacing {
    /// Creates a new spacing, clamping to the valid range.
    ///
    /// `NaN` is treated as the default spacing.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(spacing_bounds::MIN, spacing_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Offset of the entry at `index` in a stack of entries of height `extent`.
    #[must_use]
    pub fn offset_for(self, index: usize, extent: f32) -> f32 {
        index as f32 * (extent + self.0)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self(spacing_bounds::DEFAULT)
    }
}

// =============================================================================
// Timing
// =============================================================================

/// Auto-dismiss duration bounds, in milliseconds.
pub mod duration_bounds {
    /// Longest configurable default duration (10 minutes).
    pub const MAX_MS: u64 = 600_000;
    /// Default duration.
    pub const DEFAULT_MS: u64 = 4000;
}

/// How long a notification stays on screen before dismissing itself.
///
/// A zero duration marks the notification as persistent: it has no countdown
/// and stays until closed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// A duration that never expires.
    pub const PERSISTENT: Self = Self(Duration::ZERO);

    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Creates a duration capped at [`duration_bounds::MAX_MS`].
    #[must_use]
    pub fn capped_millis(ms: u64) -> Self {
        Self::from_millis(ms.min(duration_bounds::MAX_MS))
    }

    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(Duration::from_millis(duration_bounds::DEFAULT_MS))
    }
}

/// Countdown tick cadence bounds, in milliseconds.
pub mod tick_interval_bounds {
    /// Fastest cadence.
    pub const MIN_MS: u64 = 16;
    /// Slowest cadence.
    pub const MAX_MS: u64 = 1000;
    /// Default cadence.
    pub const DEFAULT_MS: u64 = 100;
}

/// Interval between two countdown ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(Duration);

impl TickInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.clamp(
            tick_interval_bounds::MIN_MS,
            tick_interval_bounds::MAX_MS,
        )))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(Duration::from_millis(tick_interval_bounds::DEFAULT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_visible_clamps_to_valid_range() {
        assert_eq!(MaxVisible::new(0).value(), max_visible_bounds::MIN);
        assert_eq!(MaxVisible::new(500).value(), max_visible_bounds::MAX);
        assert_eq!(MaxVisible::new(3).value(), 3);
    }

    #[test]
    fn history_capacity_clamps_to_valid_range() {
        assert_eq!(HistoryCapacity::new(1).value(), history_capacity_bounds::MIN);
        assert_eq!(
            HistoryCapacity::new(100_000).value(),
            history_capacity_bounds::MAX
        );
    }

    #[test]
    fn spacing_clamps_and_rejects_nan() {
        assert_eq!(Spacing::new(-4.0).value(), spacing_bounds::MIN);
        assert_eq!(Spacing::new(1000.0).value(), spacing_bounds::MAX);
        assert_eq!(Spacing::new(f32::NAN), Spacing::default());
    }

    #[test]
    fn spacing_offsets_grow_with_index() {
        let spacing = Spacing::new(8.0);
        assert_eq!(spacing.offset_for(0, 40.0), 0.0);
        assert_eq!(spacing.offset_for(2, 40.0), 96.0);
    }

    #[test]
    fn zero_duration_is_persistent() {
        assert!(DisplayDuration::from_millis(0).is_persistent());
        assert!(DisplayDuration::PERSISTENT.is_persistent());
        assert!(!DisplayDuration::default().is_persistent());
    }

    #[test]
    fn long_durations_are_kept_as_given() {
        let long = DisplayDuration::from_millis(duration_bounds::MAX_MS * 10);
        assert_eq!(long.as_millis(), duration_bounds::MAX_MS * 10);
    }

    #[test]
    fn capped_millis_stops_at_maximum() {
        let long = DisplayDuration::capped_millis(duration_bounds::MAX_MS * 10);
        assert_eq!(long.as_millis(), duration_bounds::MAX_MS);
        assert!(DisplayDuration::capped_millis(0).is_persistent());
    }

    #[test]
    fn tick_interval_clamps_to_valid_range() {
        assert_eq!(
            TickInterval::from_millis(1).as_duration(),
            Duration::from_millis(tick_interval_bounds::MIN_MS)
        );
        assert_eq!(
            TickInterval::from_millis(60_000).as_duration(),
            Duration::from_millis(tick_interval_bounds::MAX_MS)
        );
    }
}
