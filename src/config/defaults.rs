// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the notification manager. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: Visible notifications per position, history size
//! - **Layout**: Spacing between stacked notifications
//! - **Timing**: Auto-dismiss duration and tick cadence

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of notifications visible at once in one position.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Minimum visible notifications per position.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum visible notifications per position.
pub const MAX_MAX_VISIBLE: usize = 20;

/// Default number of lifecycle events kept in the history journal.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Minimum history journal capacity.
pub const MIN_HISTORY_CAPACITY: usize = 8;

/// Maximum history journal capacity.
pub const MAX_HISTORY_CAPACITY: usize = 1024;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default gap between stacked notifications (in pixels).
pub const DEFAULT_SPACING_PX: f32 = 8.0;

/// Minimum stacking gap (in pixels).
pub const MIN_SPACING_PX: f32 = 0.0;

/// Maximum stacking gap (in pixels).
pub const MAX_SPACING_PX: f32 = 64.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss duration (in milliseconds). Zero means persistent.
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Longest accepted auto-dismiss duration (10 minutes).
pub const MAX_DURATION_MS: u64 = 600_000;

/// Default cadence of the countdown tick (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Fastest tick cadence, roughly one frame at 60 Hz.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Slowest tick cadence.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;
