// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a notification (toast/snackbar) lifecycle manager for the Iced GUI framework.
//!
//! It keeps bounded per-position queues of transient notifications, drives their
//! pausable display timers, and renders them as toasts anchored to the window edges.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;
