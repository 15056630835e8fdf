// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` shows in-app notification banners in the style of mobile
//! platforms, hosted on the Iced GUI framework.
//!
//! A banner slides in from the top edge, hides itself after a delay and can
//! be tapped, swiped away or, for detailed banners, pulled down into a card
//! with action buttons or a reply field. The lifecycle lives in
//! [`banner::BannerStateMachine`], which runs headless; [`app`] hosts it in an
//! iced window.

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod gesture;
pub mod i18n;
pub mod notification;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
