// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`notification`]: Notification value objects ([`MaxVisible`](notification::MaxVisible),
//!   [`DisplayDuration`](notification::DisplayDuration), [`Spacing`](notification::Spacing))

pub mod notification;
