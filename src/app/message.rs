// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::banner;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ShowSimple,
    ShowDetailed,
    ShowReply,
    /// Dismiss whatever banner is on screen.
    HideBanner,
    /// Frame tick while a banner is live or animating.
    Tick(Instant),
    Banner(banner::Event),
    CursorMoved(Point),
    PointerReleased,
    /// The cursor left the window; an ongoing drag is cancelled.
    CursorLeft,
    WindowResized(Size),
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Auto-hide delay in seconds, overriding the config file.
    pub auto_hide: Option<f64>,
}
