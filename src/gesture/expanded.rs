// SPDX-License-Identifier: MPL-2.0
//! Drag of the expanded card and the dismiss-intent latch.
//!
//! The card moves at a fifth of the finger's speed along the axis that matches
//! the device orientation. Dragging forward builds up a "dismiss intent"
//! (the opacity of the hint shown above the card); once it is full the latch
//! engages and releasing the finger dismisses the banner.

use super::{
    Commit, GestureEffect, GesturePhase, GestureTuning, Orientation, PanEvent, PanPhase,
};

/// Snapshot of the expanded pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpandedPanState {
    pub phase: GesturePhase,
    /// Offset of the content from its origin along the pan axis.
    pub offset: f32,
    /// Accumulated dismiss intent in `0.0..=1.0`.
    pub opacity: f32,
    /// Whether releasing now dismisses.
    pub latched: bool,
}

/// Pure transition function of the expanded pan.
#[must_use]
pub fn transition(
    state: ExpandedPanState,
    event: PanEvent,
    orientation: Orientation,
    tuning: &GestureTuning,
) -> (ExpandedPanState, Vec<GestureEffect>) {
    let mut next = state;
    let mut effects = Vec::new();

    if let GesturePhase::Committed(_) = state.phase {
        return (next, effects);
    }

    if event.is_moving() {
        next.phase = GesturePhase::Dragging;

        let (delta, velocity) = orientation.project(event.translation, event.velocity);
        next.offset += delta / tuning.content_divisor;
        effects.push(GestureEffect::MoveContent { offset: next.offset });

        let step = tuning.intent_step(orientation);
        if velocity < 1.0 {
            if next.opacity > 0.0 {
                next.opacity = (next.opacity - step).max(0.0);
            } else if next.latched {
                next.latched = false;
            }
            if velocity <= tuning.unlatch_velocity {
                next.latched = false;
            }
        } else {
            if next.opacity < 1.0 {
                next.opacity = (next.opacity + step).min(1.0);
            }
            if next.opacity >= 1.0 {
                next.latched = true;
            }
            if velocity >= tuning.latch_velocity {
                next.latched = true;
                next.opacity = 1.0;
            }
        }

        effects.push(GestureEffect::SetDismissOpacity(next.opacity));
        if next.latched && !state.latched {
            effects.push(GestureEffect::PulseDismissLabel);
        }
        return (next, effects);
    }

    if state.phase != GesturePhase::Dragging {
        return (next, effects);
    }

    match event.phase {
        PanPhase::Ended if next.latched => {
            next.phase = GesturePhase::Committed(Commit::Dismiss);
            effects.push(GestureEffect::Commit(Commit::Dismiss));
        }
        _ => {
            next = ExpandedPanState {
                phase: GesturePhase::Settled,
                ..ExpandedPanState::default()
            };
            effects.push(GestureEffect::ReturnContent);
            effects.push(GestureEffect::SetDismissOpacity(0.0));
        }
    }
    (next, effects)
}

/// Stateful wrapper around [`transition`].
#[derive(Debug, Clone)]
pub struct ExpandedPan {
    state: ExpandedPanState,
    tuning: GestureTuning,
}

impl ExpandedPan {
    #[must_use]
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            state: ExpandedPanState::default(),
            tuning,
        }
    }

    pub fn handle(&mut self, event: PanEvent, orientation: Orientation) -> Vec<GestureEffect> {
        let (next, effects) = transition(self.state, event, orientation, &self.tuning);
        if next.latched != self.state.latched {
            tracing::debug!(latched = next.latched, opacity = next.opacity, "dismiss latch");
        }
        self.state = next;
        effects
    }

    pub fn reset(&mut self) {
        self.state = ExpandedPanState::default();
    }

    #[must_use]
    pub fn state(&self) -> ExpandedPanState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Vector;
    use crate::test_utils::assert_abs_diff_eq;

    fn forward(dy: f32, speed: f32) -> PanEvent {
        PanEvent::changed(Vector::new(0.0, dy), Vector::new(0.0, speed))
    }

    fn backward(dy: f32, speed: f32) -> PanEvent {
        PanEvent::changed(Vector::new(0.0, -dy), Vector::new(0.0, -speed))
    }

    #[test]
    fn content_moves_a_fifth_of_the_delta() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        let effects = pan.handle(forward(50.0, 200.0), Orientation::Portrait);

        assert_eq!(effects[0], GestureEffect::MoveContent { offset: 10.0 });
        assert_abs_diff_eq!(pan.state().opacity, 0.02, epsilon = 1e-6);
    }

    #[test]
    fn landscape_right_mirrors_the_axis() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        let event = PanEvent::changed(Vector::new(25.0, 0.0), Vector::new(-400.0, 0.0));
        let effects = pan.handle(event, Orientation::LandscapeRight);

        assert_eq!(effects[0], GestureEffect::MoveContent { offset: -5.0 });
        // Mirrored velocity is positive, so intent grows by the landscape step.
        assert_abs_diff_eq!(pan.state().opacity, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn intent_latches_when_full_and_pulses_once() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        let mut pulses = 0;
        for _ in 0..25 {
            let effects = pan.handle(forward(2.0, 300.0), Orientation::LandscapeLeft);
            pulses += effects
                .iter()
                .filter(|e| **e == GestureEffect::PulseDismissLabel)
                .count();
        }
        // Landscape moves along x, but the forward samples above are vertical.
        assert!(!pan.state().latched);

        for _ in 0..60 {
            let effects = pan.handle(forward(2.0, 300.0), Orientation::Portrait);
            pulses += effects
                .iter()
                .filter(|e| **e == GestureEffect::PulseDismissLabel)
                .count();
        }
        assert!(pan.state().latched);
        assert_abs_diff_eq!(pan.state().opacity, 1.0, epsilon = 1e-6);
        assert_eq!(pulses, 1);
    }

    #[test]
    fn fast_forward_swipe_force_latches() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        let effects = pan.handle(forward(40.0, 2500.0), Orientation::Portrait);

        assert!(pan.state().latched);
        assert!(effects.contains(&GestureEffect::SetDismissOpacity(1.0)));
        assert!(effects.contains(&GestureEffect::PulseDismissLabel));
    }

    #[test]
    fn latch_survives_slow_backward_motion_but_not_fast() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        pan.handle(forward(40.0, 2500.0), Orientation::Portrait);

        pan.handle(backward(5.0, 200.0), Orientation::Portrait);
        assert!(pan.state().latched);
        assert!(pan.state().opacity < 1.0);

        pan.handle(backward(5.0, 1600.0), Orientation::Portrait);
        assert!(!pan.state().latched);
    }

    #[test]
    fn backward_motion_at_zero_intent_releases_latch() {
        let state = ExpandedPanState {
            phase: GesturePhase::Dragging,
            offset: 0.0,
            opacity: 0.0,
            latched: true,
        };
        let (next, _) = transition(
            state,
            backward(1.0, 100.0),
            Orientation::Portrait,
            &GestureTuning::default(),
        );
        assert!(!next.latched);
        assert_eq!(next.opacity, 0.0);
    }

    #[test]
    fn release_while_latched_commits_dismiss() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        pan.handle(forward(40.0, 2500.0), Orientation::Portrait);

        let effects = pan.handle(PanEvent::ended(Vector::ZERO), Orientation::Portrait);
        assert_eq!(effects, vec![GestureEffect::Commit(Commit::Dismiss)]);
        assert_eq!(pan.state().phase, GesturePhase::Committed(Commit::Dismiss));
    }

    #[test]
    fn release_without_latch_returns_and_resets() {
        let mut pan = ExpandedPan::new(GestureTuning::default());
        pan.handle(forward(30.0, 300.0), Orientation::Portrait);

        let effects = pan.handle(PanEvent::ended(Vector::ZERO), Orientation::Portrait);
        assert_eq!(
            effects,
            vec![
                GestureEffect::ReturnContent,
                GestureEffect::SetDismissOpacity(0.0)
            ]
        );
        let state = pan.state();
        assert_eq!(state.phase, GesturePhase::Settled);
        assert_eq!(state.offset, 0.0);
        assert_eq!(state.opacity, 0.0);
        assert!(!state.latched);
    }
}
