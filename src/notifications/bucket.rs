// SPDX-License-Identifier: MPL-2.0
//! Per-position stack of visible notifications.
//!
//! A bucket is a flat list in insertion order. Renderers derive stacking
//! offsets from list order, so removing an entry from the middle needs no
//! slot bookkeeping.

use super::position::Position;
use super::record::{ClosedNotification, CloseReason, NotificationId, NotificationRecord};
use crate::domain::notification::MaxVisible;
use std::collections::VecDeque;
use std::fmt;

/// Identifies a change listener registered on a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Called with the bucket after each change to its contents.
///
/// Listeners are read-only observers. They must not call back into the
/// manager that owns the bucket.
pub type Listener = Box<dyn FnMut(&Bucket)>;

pub struct Bucket {
    position: Position,
    capacity: MaxVisible,
    /// Oldest first.
    records: VecDeque<NotificationRecord>,
    listeners: Vec<(ListenerId, Listener)>,
}

impl Bucket {
    #[must_use]
    pub fn new(position: Position, capacity: MaxVisible) -> Self {
        Self {
            position,
            capacity,
            records: VecDeque::with_capacity(capacity.value()),
            listeners: Vec::new(),
        }
    }

    /// Appends `record` at the tail.
    ///
    /// When the bucket is already full the oldest record is closed and
    /// returned as evicted.
    pub(crate) fn append(&mut self, record: NotificationRecord) -> Option<ClosedNotification> {
        let evicted = if self.records.len() >= self.capacity.value() {
            self.records.pop_front().map(|mut oldest| {
                oldest.begin_close();
                ClosedNotification::new(oldest, CloseReason::Evicted)
            })
        } else {
            None
        };
        self.records.push_back(record);
        evicted
    }

    /// Splices out the record with `id`, keeping the others in order.
    pub(crate) fn remove(&mut self, id: NotificationId) -> Option<NotificationRecord> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        self.records.remove(index)
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = NotificationRecord> + '_ {
        self.records.drain(..)
    }

    pub(crate) fn get_mut(&mut self, id: NotificationId) -> Option<&mut NotificationRecord> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut NotificationRecord> {
        self.records.iter_mut()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Records in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.records.iter().map(NotificationRecord::id).collect()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.value()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&Bucket) + 'static) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered here.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Invokes every listener with the current contents.
    pub(crate) fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in &mut listeners {
            listener(self);
        }
        self.listeners = listeners;
    }
}

impl fmt::Debug for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("position", &self.position)
            .field("capacity", &self.capacity)
            .field("records", &self.records)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
