// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-hide, surface retry and animation durations
//! - **Geometry**: Banner height, resting position and dismiss edge
//! - **Gesture**: Pan divisor, dismiss-intent steps and velocity thresholds
//! - **Identity**: Fallback app name

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a collapsed banner stays on screen (in seconds).
pub const DEFAULT_AUTO_HIDE_SECS: f64 = 5.0;

/// Maximum configurable auto-hide delay (in seconds).
pub const MAX_AUTO_HIDE_SECS: f64 = 600.0;

/// Delay between showing a banner and arming its auto-hide countdown.
pub const AUTO_HIDE_ARM_DELAY_SECS: f64 = 1.0;

/// Wait before retrying presentation when the host has no surface yet.
pub const DEFAULT_SURFACE_RETRY_SECS: f64 = 5.0;

/// Minimum surface retry delay (in seconds).
pub const MIN_SURFACE_RETRY_SECS: f64 = 0.1;

/// Maximum surface retry delay (in seconds).
pub const MAX_SURFACE_RETRY_SECS: f64 = 60.0;

/// Slide in/out of the collapsed banner, settle and content return.
pub const SLIDE_ANIMATION_MS: u64 = 500;

/// Pop of the expanded card (grow then shrink back).
pub const EXPAND_POP_MS: u64 = 350;

/// Scale pulse of the dismiss hint when the latch engages.
pub const DISMISS_PULSE_MS: u64 = 350;

/// Fade-out of the expanded card.
pub const CONTENT_OUT_MS: u64 = 500;

/// Peak scale of the dismiss hint pulse.
pub const DISMISS_PULSE_SCALE: f32 = 1.3;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Height of the collapsed banner in points.
pub const BANNER_HEIGHT: f32 = 100.0;

/// Top edge of the collapsed banner at rest.
pub const RESTING_Y: f32 = 10.0;

/// Releasing the collapsed banner with its top above `-DISMISS_EDGE` dismisses.
pub const DISMISS_EDGE: f32 = 8.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// The expanded content moves `delta / CONTENT_PAN_DIVISOR`.
pub const CONTENT_PAN_DIVISOR: f32 = 5.0;

/// Dismiss-intent increment per pan sample in portrait.
pub const PORTRAIT_INTENT_STEP: f32 = 0.02;

/// Dismiss-intent increment per pan sample in landscape.
pub const LANDSCAPE_INTENT_STEP: f32 = 0.05;

/// Forward velocity that engages the dismiss latch at once (points/s).
pub const LATCH_VELOCITY: f32 = 2000.0;

/// Backward velocity that releases the dismiss latch at once (points/s).
pub const UNLATCH_VELOCITY: f32 = -1500.0;

// ==========================================================================
// Identity Defaults
// ==========================================================================

/// Name shown in the banner header when none is configured.
pub const DEFAULT_APP_NAME: &str = "IcedBanner";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTO_HIDE_SECS >= 0.0);
    assert!(DEFAULT_AUTO_HIDE_SECS <= MAX_AUTO_HIDE_SECS);
    assert!(AUTO_HIDE_ARM_DELAY_SECS > 0.0);

    assert!(MIN_SURFACE_RETRY_SECS > 0.0);
    assert!(DEFAULT_SURFACE_RETRY_SECS >= MIN_SURFACE_RETRY_SECS);
    assert!(DEFAULT_SURFACE_RETRY_SECS <= MAX_SURFACE_RETRY_SECS);

    assert!(RESTING_Y < BANNER_HEIGHT);
    assert!(DISMISS_EDGE >= 0.0);
    assert!(CONTENT_PAN_DIVISOR > 0.0);
    assert!(PORTRAIT_INTENT_STEP > 0.0 && PORTRAIT_INTENT_STEP <= 1.0);
    assert!(LANDSCAPE_INTENT_STEP > 0.0 && LANDSCAPE_INTENT_STEP <= 1.0);
    assert!(LATCH_VELOCITY > 0.0);
    assert!(UNLATCH_VELOCITY < 0.0);
};
