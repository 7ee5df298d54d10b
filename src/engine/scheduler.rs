//! One-shot advancement timers.
//!
//! The reader arms at most one timer at a time and always cancels the old one
//! before arming a new one. Schedulers only hand out ids and remember
//! deadlines; firing is done by whoever drives the event loop, which passes the
//! due [`TimerId`] back into the reader.

use std::time::{Duration, Instant};

/// Opaque handle for a scheduled advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

pub trait Scheduler {
    /// Arms a one-shot timer that should fire after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a timer. Cancelling an unknown or fired timer does nothing.
    fn cancel(&mut self, id: TimerId);
}

/// Wall-clock scheduler used by the terminal host.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    pending: Option<(TimerId, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the pending timer is due, `None` when nothing is armed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Takes the pending timer if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<TimerId> {
        match self.pending {
            Some((id, deadline)) if deadline <= now => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn schedule_at(&mut self, deadline: Instant) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending = Some((id, deadline));
        id
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.schedule_at(Instant::now() + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        if matches!(self.pending, Some((pending, _)) if pending == id) {
            self.pending = None;
        }
    }
}

/// Scheduler without a clock, for driving the reader step by step.
///
/// Keeps every armed timer until it is cancelled or fired, so a caller can
/// observe whether more than one advancement was ever outstanding.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    armed: Vec<(TimerId, Duration)>,
    max_armed: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers armed and not yet cancelled or fired, oldest first.
    pub fn armed(&self) -> &[(TimerId, Duration)] {
        &self.armed
    }

    /// Highest number of simultaneously armed timers seen so far.
    pub fn max_armed(&self) -> usize {
        self.max_armed
    }

    /// Removes and returns the most recently armed timer, as if it fired.
    pub fn fire_latest(&mut self) -> Option<TimerId> {
        self.armed.pop().map(|(id, _)| id)
    }

    pub fn latest_delay(&self) -> Option<Duration> {
        self.armed.last().map(|&(_, delay)| delay)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.armed.push((id, delay));
        self.max_armed = self.max_armed.max(self.armed.len());
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.retain(|&(armed, _)| armed != id);
    }
}
