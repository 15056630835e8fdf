// SPDX-License-Identifier: MPL-2.0
//! Vertical drag of the collapsed banner.
//!
//! The banner follows the finger 1:1. Upward drags are always allowed;
//! downward drags only for detailed banners, and pulling the top edge past
//! the banner height expands it on the spot. On release the banner is either
//! dismissed (top edge pushed above the screen) or settles back.

use super::{Commit, GestureEffect, GesturePhase, GestureTuning, PanEvent, PanPhase};
use crate::notification::BannerStyle;

/// Snapshot of the collapsed pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollapsedPanState {
    pub phase: GesturePhase,
    /// Current top edge of the banner.
    pub top: f32,
}

impl CollapsedPanState {
    #[must_use]
    pub fn resting(tuning: &GestureTuning) -> Self {
        Self {
            phase: GesturePhase::Idle,
            top: tuning.resting_y,
        }
    }
}

/// Pure transition function of the collapsed pan.
#[must_use]
pub fn transition(
    state: CollapsedPanState,
    event: PanEvent,
    style: BannerStyle,
    tuning: &GestureTuning,
) -> (CollapsedPanState, Vec<GestureEffect>) {
    let mut next = state;
    let mut effects = Vec::new();

    if let GesturePhase::Committed(_) = state.phase {
        return (next, effects);
    }

    if event.is_moving() {
        next.phase = GesturePhase::Dragging;

        let upward = event.velocity.y < 1.0;
        if upward || style.can_expand() {
            next.top += event.translation.y;
            effects.push(GestureEffect::MoveBanner { top: next.top });
        }

        if style.can_expand() && next.top > tuning.banner_height {
            next.phase = GesturePhase::Committed(Commit::Expand);
            effects.push(GestureEffect::Commit(Commit::Expand));
        }
        return (next, effects);
    }

    if state.phase != GesturePhase::Dragging {
        return (next, effects);
    }

    match event.phase {
        PanPhase::Ended if next.top < -tuning.dismiss_edge => {
            next.phase = GesturePhase::Committed(Commit::Dismiss);
            effects.push(GestureEffect::Commit(Commit::Dismiss));
        }
        _ => {
            next.phase = GesturePhase::Settled;
            next.top = tuning.resting_y;
            effects.push(GestureEffect::SettleBanner { top: next.top });
        }
    }
    (next, effects)
}

/// Stateful wrapper around [`transition`].
#[derive(Debug, Clone)]
pub struct CollapsedPan {
    state: CollapsedPanState,
    tuning: GestureTuning,
}

impl CollapsedPan {
    #[must_use]
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            state: CollapsedPanState::resting(&tuning),
            tuning,
        }
    }

    pub fn handle(&mut self, event: PanEvent, style: BannerStyle) -> Vec<GestureEffect> {
        let (next, effects) = transition(self.state, event, style, &self.tuning);
        if next.phase != self.state.phase {
            tracing::trace!(from = ?self.state.phase, to = ?next.phase, "collapsed pan");
        }
        self.state = next;
        effects
    }

    /// Returns to `Idle` at the resting position once a settle or commit finished.
    pub fn reset(&mut self) {
        self.state = CollapsedPanState::resting(&self.tuning);
    }

    #[must_use]
    pub fn state(&self) -> CollapsedPanState {
        self.state
    }
}
