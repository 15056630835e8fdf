// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking
//!
//! Turns raw press, move and release events into the taps and incremental
//! pan samples the banner gestures consume.

use crate::gesture::{PanEvent, Vector};
use iced::Point;
use std::time::{Duration, Instant};

/// Movement (in points) below which a press-release is a tap.
pub const TAP_SLOP: f32 = 6.0;

/// A release this long after the last move carries no velocity.
const VELOCITY_TIMEOUT: Duration = Duration::from_millis(100);

/// Which part of the banner a press started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The collapsed banner.
    Banner,
    /// The message card of the expanded banner.
    Card,
    /// The dimmed area around the expanded card.
    Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutput {
    Pan {
        target: PointerTarget,
        event: PanEvent,
    },
    Tap(PointerTarget),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    target: PointerTarget,
    origin: Point,
    last: Point,
    last_at: Instant,
    velocity: Vector,
    panning: bool,
}

/// Tracks the cursor and the press in progress, if any.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Option<Point>,
    press: Option<Press>,
}

impl PointerTracker {
    /// Last known cursor position.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Starts a press on `target` at the current cursor position.
    ///
    /// Returns `false` when the cursor position is not known yet.
    pub fn press(&mut self, target: PointerTarget, at: Instant) -> bool {
        let Some(origin) = self.cursor else {
            return false;
        };
        self.press = Some(Press {
            target,
            origin,
            last: origin,
            last_at: at,
            velocity: Vector::ZERO,
            panning: false,
        });
        true
    }

    /// Records a cursor move. Emits a pan sample once the press has moved
    /// past [`TAP_SLOP`].
    pub fn moved(&mut self, position: Point, at: Instant) -> Option<PointerOutput> {
        self.cursor = Some(position);
        let press = self.press.as_mut()?;

        let delta = Vector::new(position.x - press.last.x, position.y - press.last.y);
        let dt = at.saturating_duration_since(press.last_at).as_secs_f32();
        if dt > 0.0 {
            press.velocity = Vector::new(delta.x / dt, delta.y / dt);
        }
        press.last = position;
        press.last_at = at;

        if press.panning {
            return Some(PointerOutput::Pan {
                target: press.target,
                event: PanEvent::changed(delta, press.velocity),
            });
        }

        if position.distance(press.origin) > TAP_SLOP {
            press.panning = true;
            let translation = Vector::new(position.x - press.origin.x, position.y - press.origin.y);
            return Some(PointerOutput::Pan {
                target: press.target,
                event: PanEvent::began(translation, press.velocity),
            });
        }
        None
    }

    /// Ends the press: a pan end if it moved, a tap otherwise.
    pub fn release(&mut self, at: Instant) -> Option<PointerOutput> {
        let press = self.press.take()?;
        if !press.panning {
            return Some(PointerOutput::Tap(press.target));
        }

        let velocity = if at.saturating_duration_since(press.last_at) > VELOCITY_TIMEOUT {
            Vector::ZERO
        } else {
            press.velocity
        };
        Some(PointerOutput::Pan {
            target: press.target,
            event: PanEvent::ended(velocity),
        })
    }

    /// Aborts the press, e.g. when the cursor leaves the window.
    pub fn cancel(&mut self) -> Option<PointerOutput> {
        let press = self.press.take()?;
        press.panning.then_some(PointerOutput::Pan {
            target: press.target,
            event: PanEvent::cancelled(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::PanPhase;
    use crate::test_utils::assert_abs_diff_eq;

    fn pressed_at(point: Point, target: PointerTarget) -> (PointerTracker, Instant) {
        let start = Instant::now();
        let mut tracker = PointerTracker::default();
        tracker.moved(point, start);
        assert!(tracker.press(target, start));
        (tracker, start)
    }

    #[test]
    fn press_without_cursor_is_ignored() {
        let mut tracker = PointerTracker::default();
        assert!(!tracker.press(PointerTarget::Banner, Instant::now()));
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn release_without_movement_is_tap() {
        let (mut tracker, start) = pressed_at(Point::new(10.0, 10.0), PointerTarget::Card);
        assert_eq!(tracker.moved(Point::new(12.0, 11.0), start), None);

        let out = tracker.release(start + Duration::from_millis(80));
        assert_eq!(out, Some(PointerOutput::Tap(PointerTarget::Card)));
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn movement_past_slop_begins_pan_with_total_translation() {
        let (mut tracker, start) = pressed_at(Point::new(0.0, 0.0), PointerTarget::Banner);
        tracker.moved(Point::new(0.0, 4.0), start + Duration::from_millis(10));

        let out = tracker.moved(Point::new(0.0, 20.0), start + Duration::from_millis(20));
        let Some(PointerOutput::Pan { target, event }) = out else {
            panic!("expected pan, got {out:?}");
        };
        assert_eq!(target, PointerTarget::Banner);
        assert_eq!(event.phase, PanPhase::Began);
        assert_abs_diff_eq!(event.translation.y, 20.0);
        // 16 points in 10 ms.
        assert_abs_diff_eq!(event.velocity.y, 1600.0, epsilon = 1.0);
    }

    #[test]
    fn later_moves_are_incremental() {
        let (mut tracker, start) = pressed_at(Point::new(0.0, 0.0), PointerTarget::Card);
        tracker.moved(Point::new(0.0, 30.0), start + Duration::from_millis(10));

        let out = tracker.moved(Point::new(5.0, 40.0), start + Duration::from_millis(20));
        let Some(PointerOutput::Pan { event, .. }) = out else {
            panic!("expected pan, got {out:?}");
        };
        assert_eq!(event.phase, PanPhase::Changed);
        assert_abs_diff_eq!(event.translation.x, 5.0);
        assert_abs_diff_eq!(event.translation.y, 10.0);
    }

    #[test]
    fn release_after_pause_has_no_velocity() {
        let (mut tracker, start) = pressed_at(Point::new(0.0, 0.0), PointerTarget::Backdrop);
        tracker.moved(Point::new(0.0, 50.0), start + Duration::from_millis(10));

        let out = tracker.release(start + Duration::from_millis(500));
        assert_eq!(
            out,
            Some(PointerOutput::Pan {
                target: PointerTarget::Backdrop,
                event: PanEvent::ended(Vector::ZERO),
            })
        );
    }

    #[test]
    fn cancel_only_reports_started_pans() {
        let (mut tracker, _) = pressed_at(Point::new(0.0, 0.0), PointerTarget::Banner);
        assert_eq!(tracker.cancel(), None);

        let (mut tracker, start) = pressed_at(Point::new(0.0, 0.0), PointerTarget::Banner);
        tracker.moved(Point::new(0.0, -30.0), start + Duration::from_millis(10));
        assert_eq!(
            tracker.cancel(),
            Some(PointerOutput::Pan {
                target: PointerTarget::Banner,
                event: PanEvent::cancelled(),
            })
        );
    }
}
