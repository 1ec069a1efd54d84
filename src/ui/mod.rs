// SPDX-License-Identifier: MPL-2.0
//! Rendering of notifications with Iced.
//!
//! Rendering reads the [`Manager`](crate::notifications::Manager) and reports
//! user input back as messages, following the "state down, messages up" pattern.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Toast widget and the per-position overlay

pub mod design_tokens;
pub mod toast;

pub use toast::Toast;
