// SPDX-License-Identifier: MPL-2.0
//! Notification data model.
//!
//! This module contains the values a caller builds before presenting a banner:
//!
//! - [`NotificationRequest`]: title, body, style, actions and completion handler
//! - [`NotifyAction`]: one response action with its style and handler
//! - [`sort_actions`]: the ordering policy applied when a banner expands

mod action;
mod policy;
mod request;

pub use action::{ActionHandler, ActionRow, ActionStyle, NotifyAction};
pub use policy::{sort_actions, SortedActions};
pub use request::{AutoHide, BannerStyle, CompletionHandler, NotificationRequest, SoundCue};
pub(crate) use request::RequestParts;
