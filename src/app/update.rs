// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Pointer events go through the [`PointerTracker`](crate::ui::pointer::PointerTracker)
//! first; whatever it recognizes is forwarded to the banner state machine.

use super::demo;
use super::{App, Message};
use crate::banner::{Presenter, Surface};
use crate::gesture::{backdrop_receives, PanPhase, Point, TapTarget};
use crate::notification::NotificationRequest;
use crate::ui::banner::Event;
use crate::ui::pointer::{PointerOutput, PointerTarget};
use iced::Task;
use std::time::{Duration, Instant};

/// Longest step fed to timers and animations in one tick, so a stalled
/// frame does not skip whole animations.
const MAX_TICK_STEP: Duration = Duration::from_millis(100);

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ShowSimple => {
            let request = demo::simple(&app.i18n, &app.demo_options, &app.outcome);
            present(app, request);
        }
        Message::ShowDetailed => {
            let request = demo::detailed(&app.i18n, &app.demo_options, &app.outcome);
            present(app, request);
        }
        Message::ShowReply => {
            let request = demo::reply(&app.i18n, &app.demo_options, &app.outcome);
            present(app, request);
        }
        Message::HideBanner => app.banners.dismiss(),
        Message::Tick(now) => handle_tick(app, now),
        Message::Banner(event) => handle_banner_event(app, event),
        Message::CursorMoved(position) => {
            let output = app.pointer.moved(position, Instant::now());
            dispatch(app, output);
        }
        Message::PointerReleased => {
            let output = app.pointer.release(Instant::now());
            dispatch(app, output);
        }
        Message::CursorLeft => {
            let output = app.pointer.cancel();
            dispatch(app, output);
        }
        Message::WindowResized(size) => {
            app.banners
                .presenter_mut()
                .set_surface(Some(Surface::new(size.width, size.height)));
        }
    }
    Task::none()
}

fn present(app: &mut App, request: NotificationRequest) {
    app.reply.clear();
    let handle = app.banners.present(request);
    tracing::debug!(session = %handle.id(), "demo banner requested");
}

fn handle_tick(app: &mut App, now: Instant) {
    let dt = app
        .last_tick
        .map(|last| now.saturating_duration_since(last).min(MAX_TICK_STEP))
        .unwrap_or_default();
    app.last_tick = Some(now);

    app.banners.advance(dt);
    let finished = app.banners.presenter_mut().tick(dt);
    for animation in finished {
        app.banners.on_animation_finished(animation);
    }

    if !app.needs_ticks() {
        app.last_tick = None;
    }
}

fn handle_banner_event(app: &mut App, event: Event) {
    match event {
        Event::Pressed(target) => {
            if target == PointerTarget::Backdrop && !backdrop_accepts_cursor(app) {
                return;
            }
            app.pointer.press(target, Instant::now());
        }
        Event::ActionPressed(index) => {
            app.reply.clear();
            app.banners.activate_row(index);
        }
        Event::ClosePressed => app.banners.close(),
        Event::ReplyChanged(text) => app.reply = text,
        Event::ReplySubmitted => {
            let text = std::mem::take(&mut app.reply);
            app.banners.submit_text(text);
        }
    }
}

/// Presses on the backdrop inside the action list belong to the rows.
fn backdrop_accepts_cursor(app: &App) -> bool {
    let Some(cursor) = app.pointer.cursor() else {
        return true;
    };
    let presenter = app.banners.presenter();
    let layout = presenter.surface().and_then(|surface| {
        presenter
            .scene()
            .and_then(|scene| scene.card_layout(surface, app.orientation()))
    });
    backdrop_receives(
        Point::new(cursor.x, cursor.y),
        layout.and_then(|layout| layout.action_list),
    )
}

fn dispatch(app: &mut App, output: Option<PointerOutput>) {
    let Some(output) = output else {
        return;
    };
    match output {
        PointerOutput::Tap(PointerTarget::Banner | PointerTarget::Card) => {
            app.banners.on_tap(TapTarget::BannerBody);
        }
        PointerOutput::Tap(PointerTarget::Backdrop) => app.banners.on_tap(TapTarget::Backdrop),
        PointerOutput::Pan {
            target: PointerTarget::Banner,
            event,
        } => app.banners.on_banner_pan(event),
        PointerOutput::Pan {
            target: PointerTarget::Card,
            event,
        } => app.banners.on_content_pan_auto(event),
        PointerOutput::Pan {
            target: PointerTarget::Backdrop,
            event,
        } => {
            if event.phase == PanPhase::Ended {
                app.banners.on_backdrop_swipe();
            }
        }
    }
}
