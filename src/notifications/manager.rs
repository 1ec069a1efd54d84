// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the single authority over which notifications exist. It
//! places each one in the bucket of its position, evicts the oldest entry
//! when a position is full, drives auto-dismiss countdowns from a clock, and
//! tears records down when they expire or are closed.

use super::bucket::{Bucket, ListenerId};
use super::clock::{Clock, SystemClock};
use super::history::{History, LifecycleKind};
use super::position::Position;
use super::record::{ClosedNotification, CloseReason, NotificationId, NotificationRecord};
use super::request::NotificationRequest;
use super::timer::Timer;
use crate::config::Config;
use crate::domain::notification::{DisplayDuration, MaxVisible, Spacing, TickInterval};
use iced::Subscription;
use log::debug;
use std::rc::Rc;

/// Messages routed from the render layer back into the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Advance countdowns and expire finished notifications.
    Tick,
    /// Close a specific notification by ID.
    Dismiss(NotificationId),
    /// The pointer entered a notification.
    HoverStart(NotificationId),
    /// The pointer left a notification.
    HoverEnd(NotificationId),
    /// The action button at the given index was pressed.
    Action(NotificationId, usize),
}

/// An action callback looked up while the manager was borrowed, to be run
/// after the borrow ends.
pub(crate) struct PendingAction {
    pub(crate) id: NotificationId,
    pub(crate) callback: Rc<dyn Fn(NotificationId)>,
    pub(crate) dismiss: bool,
}

impl PendingAction {
    pub(crate) fn run(&self) {
        (self.callback)(self.id);
    }
}

/// Manages the per-position buckets and every notification's lifecycle.
#[derive(Debug)]
pub struct Manager {
    /// One bucket per [`Position`], indexed by [`Position::index`].
    buckets: Vec<Bucket>,
    default_position: Position,
    default_duration: DisplayDuration,
    spacing: Spacing,
    tick_interval: TickInterval,
    history: History,
    clock: Box<dyn Clock>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a manager reading time from `clock`.
    #[must_use]
    pub fn with_clock(config: &Config, clock: impl Clock + 'static) -> Self {
        let max_visible = config.max_visible();
        let origin = clock.now();
        Self {
            buckets: Position::ALL
                .into_iter()
                .map(|position| Bucket::new(position, max_visible))
                .collect(),
            default_position: config.default_position(),
            default_duration: config.default_duration(),
            spacing: config.spacing(),
            tick_interval: config.tick_interval(),
            history: History::new(config.history_capacity(), origin),
            clock: Box::new(clock),
        }
    }

    // ---------------------------------------------------------------------
    // Public operations
    // ---------------------------------------------------------------------

    /// Displays a notification and returns its id.
    ///
    /// If the target position is full, its oldest notification is closed
    /// first (its `on_close` runs with [`CloseReason::Evicted`]).
    pub fn show(&mut self, request: NotificationRequest) -> NotificationId {
        let (id, evicted) = self.insert(request);
        if let Some(closed) = evicted {
            closed.finish();
        }
        id
    }

    /// Closes a notification. Unknown or already closed ids are ignored.
    ///
    /// Returns `true` if this call closed it.
    pub fn close(&mut self, id: NotificationId) -> bool {
        match self.detach(id, CloseReason::Dismissed) {
            Some(closed) => {
                closed.finish();
                true
            }
            None => false,
        }
    }

    /// Closes every notification in every position.
    ///
    /// Returns how many were closed.
    pub fn close_all(&mut self) -> usize {
        let closed = self.detach_all();
        let count = closed.len();
        for notification in closed {
            notification.finish();
        }
        count
    }

    /// Advances all running countdowns to the clock's current time and
    /// closes those that reached zero.
    ///
    /// Returns how many notifications expired.
    pub fn tick(&mut self) -> usize {
        let expired = self.advance();
        let count = expired.len();
        for notification in expired {
            notification.finish();
        }
        count
    }

    /// Freezes a notification's countdown.
    pub fn pause(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.update_timer(id, LifecycleKind::Paused, |timer| timer.pause(now))
    }

    /// Resumes a paused countdown from its frozen remaining time.
    pub fn resume(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.update_timer(id, LifecycleKind::Resumed, |timer| timer.resume(now))
    }

    /// Pointer entered the notification; pauses if it pauses on hover.
    pub fn hover_start(&mut self, id: NotificationId) -> bool {
        if self.pauses_on_hover(id) {
            self.pause(id)
        } else {
            false
        }
    }

    /// Pointer left the notification; resumes if it pauses on hover.
    pub fn hover_end(&mut self, id: NotificationId) -> bool {
        if self.pauses_on_hover(id) {
            self.resume(id)
        } else {
            false
        }
    }

    /// Runs the action at `index` and closes the notification if the
    /// action dismisses it.
    ///
    /// Returns `false` if the notification or action does not exist.
    pub fn trigger_action(&mut self, id: NotificationId, index: usize) -> bool {
        let Some(action) = self.prepare_action(id, index) else {
            return false;
        };
        action.run();
        if action.dismiss {
            if let Some(closed) = self.detach(id, CloseReason::ActionInvoked) {
                closed.finish();
            }
        }
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Tick => {
                self.tick();
            }
            Message::Dismiss(id) => {
                self.close(id);
            }
            Message::HoverStart(id) => {
                self.hover_start(id);
            }
            Message::HoverEnd(id) => {
                self.hover_end(id);
            }
            Message::Action(id, index) => {
                self.trigger_action(id, index);
            }
        }
    }

    /// Periodic tick while at least one countdown is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_running_timers() {
            iced::time::every(self.tick_interval.as_duration()).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationRecord> {
        self.buckets.iter().find_map(|bucket| bucket.get(id))
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn bucket(&self, position: Position) -> &Bucket {
        &self.buckets[position.index()]
    }

    /// Buckets that currently hold notifications.
    pub fn active_buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|bucket| !bucket.is_empty())
    }

    /// Notifications of one position, oldest first.
    pub fn visible(&self, position: Position) -> impl Iterator<Item = &NotificationRecord> {
        self.bucket(position).iter()
    }

    /// Total notifications across all positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    #[must_use]
    pub fn has_running_timers(&self) -> bool {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .any(NotificationRecord::is_running)
    }

    /// Stacking offset of each notification in `position`, for entries of
    /// uniform `extent` pixels.
    #[must_use]
    pub fn stack_offsets(&self, position: Position, extent: f32) -> Vec<(NotificationId, f32)> {
        self.bucket(position)
            .iter()
            .enumerate()
            .map(|(index, record)| (record.id(), self.spacing.offset_for(index, extent)))
            .collect()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn default_position(&self) -> Position {
        self.default_position
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.buckets
            .first()
            .map_or(MaxVisible::default().value(), Bucket::capacity)
    }

    #[must_use]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.tick_interval
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    /// Observes changes to one position's bucket.
    pub fn subscribe(
        &mut self,
        position: Position,
        listener: impl FnMut(&Bucket) + 'static,
    ) -> ListenerId {
        self.buckets[position.index()].subscribe(listener)
    }

    /// Removes a listener from whichever bucket holds it.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.buckets.iter_mut().any(|bucket| bucket.unsubscribe(id))
    }

    // ---------------------------------------------------------------------
    // Two-phase operations
    //
    // These mutate state and hand back the closed records without running
    // their callbacks, so a shared handle can release its borrow first.
    // ---------------------------------------------------------------------

    pub(crate) fn insert(
        &mut self,
        request: NotificationRequest,
    ) -> (NotificationId, Option<ClosedNotification>) {
        let position = request.position().unwrap_or(self.default_position);
        let duration = request.duration().unwrap_or(self.default_duration);
        let now = self.clock.now();

        let mut record =
            NotificationRecord::new(request, position, duration.as_duration(), now);
        if let Some(timer) = record.timer_mut() {
            timer.start(now);
        }
        let id = record.id();

        let bucket = &mut self.buckets[position.index()];
        let evicted = bucket.append(record);
        bucket.notify();

        if let Some(closed) = &evicted {
            debug!("notification {} evicted from {position}", closed.id());
            self.history
                .record(closed.id(), position, LifecycleKind::Evicted, now);
        }
        debug!(
            "notification {id} shown at {position} for {}ms",
            duration.as_millis()
        );
        self.history.record(id, position, LifecycleKind::Shown, now);

        (id, evicted)
    }

    pub(crate) fn detach(
        &mut self,
        id: NotificationId,
        reason: CloseReason,
    ) -> Option<ClosedNotification> {
        let now = self.clock.now();
        let bucket = self.buckets.iter_mut().find(|bucket| bucket.contains(id))?;
        let record = bucket.get_mut(id)?;
        if !record.begin_close() {
            return None;
        }
        let record = bucket.remove(id)?;
        let position = bucket.position();
        bucket.notify();

        debug!("notification {id} closed at {position}: {reason:?}");
        self.history.record(id, position, reason.into(), now);
        Some(ClosedNotification::new(record, reason))
    }

    pub(crate) fn detach_all(&mut self) -> Vec<ClosedNotification> {
        let now = self.clock.now();
        let mut closed = Vec::new();
        for bucket in &mut self.buckets {
            if bucket.is_empty() {
                continue;
            }
            let position = bucket.position();
            for mut record in bucket.drain().collect::<Vec<_>>() {
                if record.begin_close() {
                    self.history
                        .record(record.id(), position, LifecycleKind::Cleared, now);
                    closed.push(ClosedNotification::new(record, CloseReason::ClearedAll));
                }
            }
            bucket.notify();
        }
        if !closed.is_empty() {
            debug!("cleared {} notifications", closed.len());
        }
        closed
    }

    pub(crate) fn advance(&mut self) -> Vec<ClosedNotification> {
        let now = self.clock.now();
        let expired: Vec<NotificationId> = self
            .buckets
            .iter_mut()
            .flat_map(|bucket| bucket.iter_mut())
            .filter_map(|record| {
                let id = record.id();
                record
                    .timer_mut()
                    .is_some_and(|timer| timer.tick(now))
                    .then_some(id)
            })
            .collect();

        expired
            .into_iter()
            .filter_map(|id| self.detach(id, CloseReason::Expired))
            .collect()
    }

    pub(crate) fn prepare_action(
        &mut self,
        id: NotificationId,
        index: usize,
    ) -> Option<PendingAction> {
        let record = self.get(id)?;
        let action = record.request().actions().get(index)?;
        let pending = PendingAction {
            id,
            callback: action.callback(),
            dismiss: action.dismisses(),
        };
        let position = record.position();
        debug!("notification {id} action {index} invoked");
        if !pending.dismiss {
            let now = self.clock.now();
            self.history
                .record(id, position, LifecycleKind::ActionInvoked, now);
        }
        Some(pending)
    }

    fn pauses_on_hover(&self, id: NotificationId) -> bool {
        self.get(id)
            .is_some_and(|record| record.request().pauses_on_hover())
    }

    fn update_timer(
        &mut self,
        id: NotificationId,
        kind: LifecycleKind,
        apply: impl FnOnce(&mut Timer) -> bool,
    ) -> bool {
        let now = self.clock.now();
        let Some(bucket) = self.buckets.iter_mut().find(|bucket| bucket.contains(id)) else {
            return false;
        };
        let changed = bucket
            .get_mut(id)
            .and_then(|record| record.timer_mut())
            .is_some_and(apply);
        if changed {
            let position = bucket.position();
            bucket.notify();
            debug!("notification {id} {kind:?}");
            self.history.record(id, position, kind, now);
        }
        changed
    }
}
