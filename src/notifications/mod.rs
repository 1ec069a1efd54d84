// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle engine.
//!
//! Notifications are transient messages shown in one of nine screen
//! positions. Each position keeps its own bounded FIFO bucket; a display
//! timer per entry auto-closes it, and hovering can pause that timer.
//!
//! # Components
//!
//! - [`request`] - `NotificationRequest` builder and presentation options
//! - [`position`] - The nine screen anchors
//! - [`timer`] - Pausable countdown driven by a [`Clock`]
//! - [`record`] - Live notification state and close reasons
//! - [`bucket`] - Per-position bounded queue with change listeners
//! - [`history`] - Bounded lifecycle journal
//! - [`manager`] - `Manager` owning the buckets and all transitions
//! - [`context`] - Shared handle, scoped lookup and the `Notifier` facade
//!
//! # Usage
//!
//! ```
//! use iced_snackbar::notifications::{Manager, NotificationRequest, Position};
//!
//! let mut manager = Manager::new();
//! let id = manager.show(
//!     NotificationRequest::success("Image saved")
//!         .with_position(Position::TopRight)
//!         .with_duration_ms(3000),
//! );
//! assert!(manager.contains(id));
//!
//! assert!(manager.close(id));
//! assert!(manager.is_empty());
//! ```
//!
//! # Lifecycle
//!
//! - A shown entry is appended to its position's bucket; when the bucket
//!   is full the oldest entry is evicted
//! - A zero duration makes the entry persistent until closed
//! - Every close path removes the entry first, then runs `on_close` once

pub mod bucket;
pub mod clock;
pub mod context;
pub mod history;
pub mod manager;
pub mod position;
pub mod record;
pub mod request;
pub mod timer;

pub use bucket::{Bucket, Listener, ListenerId};
pub use clock::{Clock, ManualClock, SystemClock};
pub use context::{Handle, ListenerGuard, Notifier, Scope};
pub use history::{History, LifecycleEvent, LifecycleKind};
pub use manager::{Manager, Message as NotificationMessage};
pub use position::{Position, UnknownPosition};
pub use record::{CloseReason, ClosedNotification, NotificationId, NotificationRecord, Status};
pub use request::{
    Action, ColorOverrides, Content, Kind, NotificationRequest, OnClose, Overrides, Politeness,
    ProgressStyle, Size, Variant,
};
pub use timer::{Timer, TimerState};
