// SPDX-License-Identifier: MPL-2.0
//! Test helpers.
//!
//! Gesture offsets, intents and animation values are accumulated `f32`s;
//! compare them with `approx` rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
