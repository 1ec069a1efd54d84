// SPDX-License-Identifier: MPL-2.0
//! Manager-owned notification records.
//!
//! A record pairs the caller's immutable request with the identity and
//! countdown the manager assigns to it.

use super::position::Position;
use super::request::NotificationRequest;
use super::timer::{Timer, TimerState};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter, so they are never reused and never
/// collide between independent managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scheduled,
    Running,
    Paused,
    /// Being torn down; its countdown is already stopped.
    Closing,
    Closed,
}

/// Why a notification left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    Expired,
    /// Closed by the user or by an explicit `close` call.
    Dismissed,
    /// Pushed out of a full position by a newer notification.
    Evicted,
    ClearedAll,
    ActionInvoked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Closing,
    Closed,
}

/// A notification the manager is displaying.
#[derive(Debug)]
pub struct NotificationRecord {
    id: NotificationId,
    request: NotificationRequest,
    created_at: Instant,
    position: Position,
    /// `None` for persistent notifications.
    timer: Option<Timer>,
    phase: Phase,
}

impl NotificationRecord {
    pub(crate) fn new(
        request: NotificationRequest,
        position: Position,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        let timer = (!duration.is_zero()).then(|| Timer::new(duration));
        Self {
            id: NotificationId::next(),
            request,
            created_at,
            position,
            timer,
            phase: Phase::Active,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> &NotificationRequest {
        &self.request
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Resolved position (request position or the manager default).
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.timer.is_none()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Closed => Status::Closed,
            Phase::Closing => Status::Closing,
            Phase::Active => match self.timer.as_ref().map(Timer::state) {
                Some(TimerState::Scheduled) => Status::Scheduled,
                Some(TimerState::Paused) => Status::Paused,
                Some(TimerState::Done) => Status::Closing,
                Some(TimerState::Running) | None => Status::Running,
            },
        }
    }

    /// Time left before auto-dismiss; `None` for persistent notifications.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.timer.as_ref().map(Timer::remaining)
    }

    #[must_use]
    pub fn remaining_ms(&self) -> Option<u64> {
        self.remaining()
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    /// Remaining fraction of the countdown for the progress indicator.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.timer.as_ref().and_then(Timer::progress)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Active && self.timer.as_ref().is_some_and(Timer::is_running)
    }

    pub(crate) fn timer_mut(&mut self) -> Option<&mut Timer> {
        if self.phase != Phase::Active {
            return None;
        }
        self.timer.as_mut()
    }

    /// Marks the record closing and stops its countdown.
    ///
    /// Returns `false` if it was already closing or closed.
    pub(crate) fn begin_close(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Closing;
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
        true
    }

    pub(crate) fn request_mut(&mut self) -> &mut NotificationRequest {
        &mut self.request
    }

    fn mark_closed(&mut self) {
        self.phase = Phase::Closed;
    }
}

/// A record already removed from its bucket whose `on_close` has not run yet.
///
/// Finishing is kept separate from removal so the callback can run after the
/// manager is no longer borrowed.
#[must_use = "call `finish` to run the close callback"]
#[derive(Debug)]
pub struct ClosedNotification {
    record: NotificationRecord,
    reason: CloseReason,
}

impl ClosedNotification {
    pub(crate) fn new(record: NotificationRecord, reason: CloseReason) -> Self {
        Self { record, reason }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.record.id()
    }

    #[must_use]
    pub fn reason(&self) -> CloseReason {
        self.reason
    }

    /// Runs the `on_close` callback and returns the now closed record.
    pub fn finish(mut self) -> NotificationRecord {
        if let Some(on_close) = self.record.request_mut().take_on_close() {
            on_close(self.reason);
        }
        self.record.mark_closed();
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn record(duration_ms: u64) -> NotificationRecord {
        NotificationRecord::new(
            NotificationRequest::new("test"),
            Position::default(),
            Duration::from_millis(duration_ms),
            Instant::now(),
        )
    }

    #[test]
    fn notification_ids_are_unique() {
        let a = record(1000);
        let b = record(1000);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn timed_record_starts_scheduled() {
        let record = record(1000);
        assert_eq!(record.status(), Status::Scheduled);
        assert_eq!(record.remaining_ms(), Some(1000));
        assert!(!record.is_persistent());
    }

    #[test]
    fn zero_duration_record_is_persistent() {
        let record = record(0);
        assert!(record.is_persistent());
        assert_eq!(record.status(), Status::Running);
        assert!(record.remaining().is_none());
        assert!(record.progress().is_none());
    }

    #[test]
    fn begin_close_happens_once_and_stops_timer() {
        let mut record = record(1000);
        let now = Instant::now();
        record.timer_mut().expect("timed record").start(now);

        assert!(record.begin_close());
        assert!(!record.begin_close());
        assert_eq!(record.status(), Status::Closing);
        assert!(record.timer_mut().is_none());
    }

    #[test]
    fn finish_runs_on_close_with_reason() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let mut record = NotificationRecord::new(
            NotificationRequest::new("bye").on_close(move |reason| sink.set(Some(reason))),
            Position::TopLeft,
            Duration::from_millis(500),
            Instant::now(),
        );
        record.begin_close();

        let closed = ClosedNotification::new(record, CloseReason::Evicted).finish();

        assert_eq!(seen.get(), Some(CloseReason::Evicted));
        assert_eq!(closed.status(), Status::Closed);
        assert!(!closed.request().has_on_close());
    }
}
