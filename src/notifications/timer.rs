// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss countdown for a single notification.
//!
//! ```text
//! Scheduled --start--> Running --pause--> Paused
//!                         ^                 |
//!                         +-----resume------+
//! any --stop--> Done        Running --tick reaches zero--> Done (expires once)
//! ```
//!
//! The countdown only moves on `tick`, so the remaining time and progress are
//! frozen between ticks and while paused.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created but not yet counting.
    Scheduled,
    Running,
    Paused,
    /// Terminal. No further decrements or expirations.
    Done,
}

/// Countdown owned by exactly one notification record.
#[derive(Debug, Clone)]
pub struct Timer {
    state: TimerState,
    total: Duration,
    remaining: Duration,
    /// Instant up to which `remaining` has been accounted for.
    last_update: Option<Instant>,
}

impl Timer {
    /// Creates a scheduled countdown of `total`.
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            state: TimerState::Scheduled,
            total,
            remaining: total,
            last_update: None,
        }
    }

    /// Starts counting down from `now`. Only valid from `Scheduled`.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Scheduled {
            return false;
        }
        self.state = TimerState::Running;
        self.last_update = Some(now);
        true
    }

    /// Freezes the countdown. No-op unless running.
    ///
    /// Time elapsed since the last tick is accounted for first. If that
    /// exhausts the countdown the timer stays running so the next tick
    /// expires it.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.settle(now);
        if self.remaining.is_zero() {
            return false;
        }
        self.state = TimerState::Paused;
        self.last_update = None;
        true
    }

    /// Continues counting from the frozen remaining time. No-op unless paused.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }
        self.state = TimerState::Running;
        self.last_update = Some(now);
        true
    }

    /// Cancels the countdown without expiring. Idempotent.
    pub fn stop(&mut self) {
        self.state = TimerState::Done;
        self.last_update = None;
    }

    /// Advances a running countdown to `now`.
    ///
    /// Returns `true` exactly once, on the tick that reaches zero.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.settle(now);
        if self.remaining.is_zero() {
            self.state = TimerState::Done;
            self.last_update = None;
            return true;
        }
        false
    }

    fn settle(&mut self, now: Instant) {
        if let Some(last) = self.last_update {
            let elapsed = now.saturating_duration_since(last);
            self.remaining = self.remaining.saturating_sub(elapsed);
            self.last_update = Some(now);
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == TimerState::Done
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Remaining fraction in `[0, 1]` while running or paused.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        match self.state {
            TimerState::Running | TimerState::Paused => {
                if self.total.is_zero() {
                    return Some(0.0);
                }
                let fraction = self.remaining.as_secs_f64() / self.total.as_secs_f64();
                Some(fraction.clamp(0.0, 1.0) as f32)
            }
            TimerState::Scheduled | TimerState::Done => None,
        }
    }
}
