// SPDX-License-Identifier: MPL-2.0
//! Bounded journal of notification lifecycle events.
//!
//! The journal is a memory-bounded ring buffer: once it reaches capacity,
//! recording a new event evicts the oldest one. Events are kept in
//! chronological order (oldest first).
//!
//! Each event carries two timestamps: `elapsed`, read from the manager's
//! [`Clock`](super::clock::Clock) and measured from the manager's creation,
//! which lines up with countdowns; and `at`, the wall-clock time the event
//! was recorded, for display and export.

use super::position::Position;
use super::record::{CloseReason, NotificationId};
use crate::domain::notification::HistoryCapacity;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleKind {
    Shown,
    Paused,
    Resumed,
    Expired,
    Dismissed,
    Evicted,
    Cleared,
    ActionInvoked,
}

impl From<CloseReason> for LifecycleKind {
    fn from(reason: CloseReason) -> Self {
        match reason {
            CloseReason::Expired => LifecycleKind::Expired,
            CloseReason::Dismissed => LifecycleKind::Dismissed,
            CloseReason::Evicted => LifecycleKind::Evicted,
            CloseReason::ClearedAll => LifecycleKind::Cleared,
            CloseReason::ActionInvoked => LifecycleKind::ActionInvoked,
        }
    }
}

/// One recorded transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub id: NotificationId,
    pub position: Position,
    pub kind: LifecycleKind,
    /// Clock time since the manager was created.
    pub elapsed: Duration,
    /// Wall-clock time of recording.
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct History {
    events: VecDeque<LifecycleEvent>,
    capacity: usize,
    origin: Instant,
}

impl History {
    /// Creates an empty journal whose `elapsed` times count from `origin`.
    #[must_use]
    pub fn new(capacity: HistoryCapacity, origin: Instant) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
            origin,
        }
    }

    pub(crate) fn record(
        &mut self,
        id: NotificationId,
        position: Position,
        kind: LifecycleKind,
        now: Instant,
    ) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(LifecycleEvent {
            id,
            position,
            kind,
            elapsed: now.saturating_duration_since(self.origin),
            at: Utc::now(),
        });
    }

    /// Events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter()
    }

    /// Events concerning one notification, oldest first.
    pub fn for_notification(&self, id: NotificationId) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter().filter(move |event| event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::history_capacity_bounds;

    #[test]
    fn oldest_events_are_dropped_at_capacity() {
        let now = Instant::now();
        let mut history =
            History::new(HistoryCapacity::new(history_capacity_bounds::MIN), now);
        let ids: Vec<_> = (0..history_capacity_bounds::MIN + 2)
            .map(|_| NotificationId::next())
            .collect();

        for id in &ids {
            history.record(*id, Position::Center, LifecycleKind::Shown, now);
        }

        assert_eq!(history.len(), history_capacity_bounds::MIN);
        let first = history.iter().next().expect("history is not empty");
        assert_eq!(first.id, ids[2]);
    }

    #[test]
    fn events_can_be_filtered_by_notification() {
        let now = Instant::now();
        let mut history = History::new(HistoryCapacity::default(), now);
        let a = NotificationId::next();
        let b = NotificationId::next();
        history.record(a, Position::TopLeft, LifecycleKind::Shown, now);
        history.record(b, Position::TopLeft, LifecycleKind::Shown, now);
        history.record(a, Position::TopLeft, LifecycleKind::Dismissed, now);

        let kinds: Vec<_> = history.for_notification(a).map(|e| e.kind).collect();
        assert_eq!(kinds, vec![LifecycleKind::Shown, LifecycleKind::Dismissed]);
    }

    #[test]
    fn elapsed_is_measured_from_origin() {
        let origin = Instant::now();
        let mut history = History::new(HistoryCapacity::default(), origin);
        let id = NotificationId::next();
        history.record(
            id,
            Position::Center,
            LifecycleKind::Shown,
            origin + Duration::from_millis(250),
        );

        let event = history.iter().next().expect("history is not empty");
        assert_eq!(event.elapsed, Duration::from_millis(250));
    }

    #[test]
    fn close_reasons_map_to_lifecycle_kinds() {
        assert_eq!(
            LifecycleKind::from(CloseReason::ClearedAll),
            LifecycleKind::Cleared
        );
        assert_eq!(
            LifecycleKind::from(CloseReason::Expired),
            LifecycleKind::Expired
        );
    }
}
