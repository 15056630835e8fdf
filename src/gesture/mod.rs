// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation for banners.
//!
//! Pan and tap input is turned into decisions (move, expand, dismiss, settle)
//! by small state machines with pure transition functions. They know nothing
//! about rendering: the banner state machine applies the returned
//! [`GestureEffect`]s through its presenter.
//!
//! - [`CollapsedPan`]: vertical drag of the collapsed banner
//! - [`ExpandedPan`]: drag of the expanded card with the dismiss-intent latch
//! - [`tap`]: tap routing and the action-list exclusion rule

pub mod collapsed;
pub mod expanded;
pub mod tap;

pub use collapsed::{CollapsedPan, CollapsedPanState};
pub use expanded::{ExpandedPan, ExpandedPanState};
pub use tap::{backdrop_receives, route_tap, Point, Rect, TapDecision, TapTarget};

use crate::config::{
    BANNER_HEIGHT, CONTENT_PAN_DIVISOR, DISMISS_EDGE, LANDSCAPE_INTENT_STEP, LATCH_VELOCITY,
    PORTRAIT_INTENT_STEP, RESTING_Y, UNLATCH_VELOCITY,
};

/// A 2D quantity (translation in points, velocity in points per second).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle of a pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One pan sample. `translation` is the delta since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub translation: Vector,
    pub velocity: Vector,
}

impl PanEvent {
    #[must_use]
    pub fn began(translation: Vector, velocity: Vector) -> Self {
        Self {
            phase: PanPhase::Began,
            translation,
            velocity,
        }
    }

    #[must_use]
    pub fn changed(translation: Vector, velocity: Vector) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation,
            velocity,
        }
    }

    #[must_use]
    pub fn ended(velocity: Vector) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation: Vector::ZERO,
            velocity,
        }
    }

    #[must_use]
    pub fn cancelled() -> Self {
        Self {
            phase: PanPhase::Cancelled,
            translation: Vector::ZERO,
            velocity: Vector::ZERO,
        }
    }

    fn is_moving(&self) -> bool {
        matches!(self.phase, PanPhase::Began | PanPhase::Changed)
    }
}

/// Where a drag ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Committed(Commit),
    Settled,
}

/// Decision a drag committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Expand,
    Dismiss,
}

/// Side effect requested by a gesture transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    /// Move the collapsed banner so its top edge sits at `top`.
    MoveBanner { top: f32 },
    /// Animate the collapsed banner back to `top`.
    SettleBanner { top: f32 },
    /// Move the expanded content along its pan axis.
    MoveContent { offset: f32 },
    /// Animate the expanded content back to its origin.
    ReturnContent,
    /// Opacity of the "dismiss" hint above the expanded card.
    SetDismissOpacity(f32),
    /// Short scale pulse of the dismiss hint when the latch engages.
    PulseDismissLabel,
    Commit(Commit),
}

/// Device orientation, which picks the pan axis of the expanded card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    LandscapeLeft,
    /// Landscape rotated the other way; the pan axis is mirrored.
    LandscapeRight,
}

impl Orientation {
    /// Derives orientation from surface bounds.
    #[must_use]
    pub fn from_bounds(width: f32, height: f32, mirrored: bool) -> Self {
        if width <= height {
            Orientation::Portrait
        } else if mirrored {
            Orientation::LandscapeRight
        } else {
            Orientation::LandscapeLeft
        }
    }

    #[must_use]
    pub fn is_landscape(self) -> bool {
        self != Orientation::Portrait
    }

    /// Projects a sample onto the pan axis, returning `(delta, velocity)`.
    #[must_use]
    pub fn project(self, translation: Vector, velocity: Vector) -> (f32, f32) {
        match self {
            Orientation::Portrait => (translation.y, velocity.y),
            Orientation::LandscapeLeft => (translation.x, velocity.x),
            Orientation::LandscapeRight => (-translation.x, -velocity.x),
        }
    }
}

/// Thresholds and factors used by the pan recognizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTuning {
    /// Height of the collapsed banner; dragging its top below this expands it.
    pub banner_height: f32,
    /// Resting top edge of the collapsed banner.
    pub resting_y: f32,
    /// Releasing with the top edge above `-dismiss_edge` dismisses.
    pub dismiss_edge: f32,
    /// The expanded content moves `delta / content_divisor`.
    pub content_divisor: f32,
    pub portrait_step: f32,
    pub landscape_step: f32,
    /// Velocity at or above which the dismiss latch is forced on.
    pub latch_velocity: f32,
    /// Velocity at or below which the dismiss latch is forced off.
    pub unlatch_velocity: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            banner_height: BANNER_HEIGHT,
            resting_y: RESTING_Y,
            dismiss_edge: DISMISS_EDGE,
            content_divisor: CONTENT_PAN_DIVISOR,
            portrait_step: PORTRAIT_INTENT_STEP,
            landscape_step: LANDSCAPE_INTENT_STEP,
            latch_velocity: LATCH_VELOCITY,
            unlatch_velocity: UNLATCH_VELOCITY,
        }
    }
}

impl GestureTuning {
    /// Intent step for the given orientation.
    #[must_use]
    pub fn intent_step(&self, orientation: Orientation) -> f32 {
        if orientation.is_landscape() {
            self.landscape_step
        } else {
            self.portrait_step
        }
    }
}
