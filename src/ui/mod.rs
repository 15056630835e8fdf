// SPDX-License-Identifier: MPL-2.0
//! User interface of the banner host.
//!
//! Follows the Elm-style "state down, messages up" pattern: the banner state
//! machine writes into a [`scene::Scene`] through [`scene::IcedPresenter`],
//! [`banner`] renders that scene and reports [`banner::Event`]s back.
//!
//! - [`banner`] - Collapsed bar, expanded card, action rows and reply field
//! - [`scene`] - Presenter implementation and animation timeline
//! - [`pointer`] - Tap and pan recognition from raw mouse events
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod banner;
pub mod design_tokens;
pub mod pointer;
pub mod scene;
