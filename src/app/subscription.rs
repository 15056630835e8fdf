// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Mouse events are routed regardless of capture status: a drag that starts
//! on a banner keeps tracking even when the cursor passes over other widgets.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Frame interval while a banner is on screen.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Ticks drive the banner timers and animations; none are needed while
/// nothing is pending.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
