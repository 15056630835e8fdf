// SPDX-License-Identifier: MPL-2.0
//! One-shot timers for deferred presentation and auto-hide.
//!
//! Timers do not carry closures: they carry a [`TimerEvent`] which the owner
//! of the scheduler hands back to
//! [`BannerStateMachine::on_timer`](super::BannerStateMachine::on_timer)
//! when it comes due. Everything runs on the UI thread.

use super::session::SessionId;
use std::time::Duration;

/// Handle used to cancel a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Retry presentation once the host surface had time to attach.
    DeferredPresent(SessionId),
    /// Arm the auto-hide countdown (one second after showing).
    ArmAutoHide(SessionId),
    /// The auto-hide countdown ran out.
    AutoHide(SessionId),
}

impl TimerEvent {
    #[must_use]
    pub fn session(self) -> SessionId {
        match self {
            TimerEvent::DeferredPresent(id)
            | TimerEvent::ArmAutoHide(id)
            | TimerEvent::AutoHide(id) => id,
        }
    }
}

/// A source of cancellable one-shot timers.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerToken;

    /// Cancels a timer. Cancelling a fired or unknown token does nothing.
    fn cancel(&mut self, token: TimerToken);
}

#[derive(Debug, Clone)]
struct Pending {
    token: TimerToken,
    due: Duration,
    event: TimerEvent,
}

/// Scheduler driven by an explicit clock.
///
/// The clock only moves when the owner says so, which makes it suitable both
/// for simulated time in tests and for hosts that forward their own ticks.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_token: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Removes the earliest timer due at or before `until` and moves the clock
    /// to its deadline. Timers with equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerEvent> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.token.0))
            .map(|(i, _)| i)?;

        let fired = self.pending.remove(index);
        self.now = self.now.max(fired.due);
        Some(fired.event)
    }

    /// Moves the clock forward to `time`. The clock never goes back.
    pub fn set_now(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Moves the clock by `dt` and returns every timer that came due, in order.
    ///
    /// Timers scheduled while handling the returned events are not included;
    /// use [`BannerStateMachine::advance`](super::BannerStateMachine::advance)
    /// to fire those as well.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerEvent> {
        let until = self.now + dt;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(until) {
            fired.push(event);
        }
        self.set_now(until);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push(Pending {
            token,
            due: self.now + delay,
            event,
        });
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|p| p.token != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> SessionId {
        SessionId::from_raw(n)
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_once(Duration::from_secs(3), TimerEvent::AutoHide(id(1)));
        scheduler.schedule_once(Duration::from_secs(1), TimerEvent::ArmAutoHide(id(1)));

        let fired = scheduler.advance(Duration::from_secs(5));
        assert_eq!(
            fired,
            vec![TimerEvent::ArmAutoHide(id(1)), TimerEvent::AutoHide(id(1))]
        );
        assert_eq!(scheduler.now(), Duration::from_secs(5));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut scheduler = ManualScheduler::new();
        let token = scheduler.schedule_once(Duration::from_secs(1), TimerEvent::AutoHide(id(1)));
        scheduler.cancel(token);

        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn timers_not_yet_due_stay_pending() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_once(Duration::from_secs(5), TimerEvent::DeferredPresent(id(2)));

        assert!(scheduler.advance(Duration::from_millis(4999)).is_empty());
        assert_eq!(scheduler.next_due(), Some(Duration::from_secs(5)));
        assert_eq!(
            scheduler.advance(Duration::from_millis(1)),
            vec![TimerEvent::DeferredPresent(id(2))]
        );
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_once(Duration::from_secs(1), TimerEvent::ArmAutoHide(id(1)));
        scheduler.schedule_once(Duration::from_secs(1), TimerEvent::AutoHide(id(2)));

        assert_eq!(
            scheduler.pop_due(Duration::from_secs(1)),
            Some(TimerEvent::ArmAutoHide(id(1)))
        );
        assert_eq!(
            scheduler.pop_due(Duration::from_secs(1)),
            Some(TimerEvent::AutoHide(id(2)))
        );
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut scheduler = ManualScheduler::new();
        scheduler.set_now(Duration::from_secs(3));
        scheduler.set_now(Duration::from_secs(1));
        assert_eq!(scheduler.now(), Duration::from_secs(3));
    }
}
